use std::{fs::File, io::BufReader, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use clap::Parser as _;
use mediaplaylist_rs::{
    Parser,
    format::{ParsedEntry, SkipReason},
};
use strmsync::{Args, fetch::Fetcher, logging, reconcile::Reconciler, report};
use tracing::{error, info, warn};

async fn app_entry(args: &Args, started_at: Instant) -> Result<()> {
    let fetcher = Fetcher::new()?;
    // a failed fetch aborts here, before the library folders are touched
    let playlist_path = fetcher
        .obtain_playlist(&args.m3u_url, &args.cache_path, args.max_cache_age_hours)
        .await?;

    let playlist = File::open(&playlist_path)
        .with_context(|| format!("Opening playlist {}", playlist_path.display()))?;
    let parser = Parser::new(BufReader::new(playlist))?;

    let mut reconciler = Reconciler::new(&args.movies_directory, &args.tv_shows_directory)
        .context("Creating library folders")?;

    for entry in parser {
        match entry {
            ParsedEntry::Media(media) => reconciler.record(&media),
            ParsedEntry::Skipped(skipped) => match skipped.reason {
                SkipReason::MissingTvgName => warn!(
                    "No tvg-name found in line: {} at line {}",
                    skipped.line, skipped.index
                ),
                SkipReason::UnsupportedNameFormat => warn!(
                    "Unsupported tvg-name format in line: {} at line {}",
                    skipped.line, skipped.index
                ),
            },
        }
    }

    reconciler.sweep().context("Sweeping stale pointer files")?;
    report(&reconciler.stats(), started_at);

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let _guard = match logging::init(&args.log_path) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to set up logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let started_at = Instant::now();
    info!("Run started");

    if let Err(e) = app_entry(&args, started_at).await {
        error!("Fatal error: {e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
