//! Parallel processing utilities

use crate::{SeqdynError, SeqdynResult};

/// Configure the global thread pool
pub fn configure_thread_pool(threads: usize) -> SeqdynResult<()> {
    let threads = if threads == 0 {
        num_cpus::get()
    } else {
        threads
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .map_err(|e| SeqdynError::Configuration(format!("Failed to build thread pool: {}", e)))?;

    tracing::debug!("Configured global thread pool with {} threads", threads);
    Ok(())
}

/// Number of unordered pairs among `n` items
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Check if we should use parallel processing based on item count
pub fn should_parallelize(item_count: usize, threshold: usize) -> bool {
    item_count > threshold && rayon::current_num_threads() > 1
}
