use std::time::Instant;

use tracing::info;

use crate::reconcile::RunStats;

/// Emits the end-of-run summary. The start instant is threaded in by the
/// caller; there is no process-wide run clock.
pub fn report(stats: &RunStats, started_at: Instant) {
    info!("Total movies seen: {}", stats.movies);
    info!("Total TV episodes seen: {}", stats.episodes);
    info!("New movies added: {}", stats.new_movies);
    info!("New TV episodes added: {}", stats.new_episodes);
    info!("Pointer files deleted: {}", stats.deleted);
    info!("Total run time: {:.2?}", started_at.elapsed());
}
