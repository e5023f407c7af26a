use std::path::PathBuf;

use clap::Parser;

/// Syncs an IPTV m3u playlist into movie and TV-show .strm libraries.
#[derive(Debug, Parser)]
#[command(name = "strmsync", version, about)]
pub struct Args {
    /// Directory receiving movie pointer files
    #[arg(long, env = "STRMSYNC_MOVIES_DIRECTORY")]
    pub movies_directory: PathBuf,

    /// Directory receiving TV-show pointer files
    #[arg(long, env = "STRMSYNC_TV_SHOWS_DIRECTORY")]
    pub tv_shows_directory: PathBuf,

    /// Playlist source URL
    #[arg(long, env = "STRMSYNC_M3U_URL")]
    pub m3u_url: String,

    /// Local copy of the playlist, reused while fresh
    #[arg(long, default_value = "m3u_temp")]
    pub cache_path: PathBuf,

    /// Cache freshness window in hours
    #[arg(long, default_value_t = 24)]
    pub max_cache_age_hours: u64,

    /// Diagnostic log file
    #[arg(long, default_value = "strmsync.log")]
    pub log_path: PathBuf,
}
