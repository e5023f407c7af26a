use std::{
    error::Error,
    fmt::Display,
    fs, io,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use reqwest::{Client, StatusCode};
use tracing::debug;

/// Some upstreams reject default client identities, so requests go out
/// with a desktop-browser user agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/85.0.4183.121 Safari/537.3";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct Fetcher {
    http_client: Client,
}

#[derive(Debug)]
pub enum FetchError {
    RequestNotSuccess(u16),
    RequestError(reqwest::Error),
    IoError(io::Error),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::RequestNotSuccess(status) => write!(f, "Request was not successful: {}", status),
            Self::RequestError(e) => e.fmt(f),
            Self::IoError(e) => e.fmt(f),
        }
    }
}
impl Error for FetchError {}
impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::RequestError(value)
    }
}
impl From<io::Error> for FetchError {
    fn from(value: io::Error) -> Self {
        Self::IoError(value)
    }
}

impl Fetcher {
    pub fn new() -> Result<Self, FetchError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { http_client })
    }

    /// Returns a local path to the playlist: `cache_path` as-is while it is
    /// younger than `max_age_hours`, a fresh single-attempt download
    /// persisted over it otherwise.
    pub async fn obtain_playlist(
        &self,
        source_url: &str,
        cache_path: &Path,
        max_age_hours: u64,
    ) -> Result<PathBuf, FetchError> {
        if is_cache_fresh(cache_path, max_age_hours) {
            debug!("Reusing cached playlist at {}", cache_path.display());
            return Ok(cache_path.to_path_buf());
        }

        let response = self.http_client.get(source_url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(FetchError::RequestNotSuccess(response.status().as_u16()));
        }

        let bytes = response.bytes().await?;
        fs::write(cache_path, &bytes)?;

        Ok(cache_path.to_path_buf())
    }
}

pub fn is_cache_fresh(path: &Path, max_age_hours: u64) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };
    let Ok(modified) = metadata.modified() else {
        return false;
    };

    match SystemTime::now().duration_since(modified) {
        Ok(age) => age < Duration::from_secs(max_age_hours.saturating_mul(3600)),
        // mtime in the future, treat as fresh
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{Fetcher, is_cache_fresh};

    #[test]
    fn test_cache_freshness() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("m3u_temp");

        assert!(!is_cache_fresh(&path, 24));

        fs::write(&path, "#EXTM3U\n").unwrap();
        assert!(is_cache_fresh(&path, 24));
        assert!(!is_cache_fresh(&path, 0));
        // an absurd window must not overflow the seconds conversion
        assert!(is_cache_fresh(&path, u64::MAX));
    }

    #[tokio::test]
    async fn test_fresh_cache_short_circuits_network() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("m3u_temp");
        fs::write(&path, "#EXTM3U\n").unwrap();

        let fetcher = Fetcher::new().unwrap();
        // the URL is unusable on purpose: a fresh cache must win without a request
        let result = fetcher
            .obtain_playlist("http://127.0.0.1:1/playlist.m3u", &path, 24)
            .await
            .unwrap();
        assert_eq!(result, path);
    }
}
