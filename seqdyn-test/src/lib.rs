//! Test utilities for the seqdyn workspace
//!
//! Shared fixtures (the reference DNA-alphabet examples, synthetic
//! neighborhood trajectories) and assertions over distance matrices.

pub mod assertions;
pub mod fixtures;

pub use assertions::{assert_matrix_approx_eq, assert_symmetric, assert_zero_diagonal};
pub use fixtures::{chars, random_trajectories, TrajectoryGenerator};

use tracing_subscriber::EnvFilter;

/// Initialize test logging (call once per test module).
///
/// Library events go through `tracing`, so they are captured with the test
/// writer and filtered by `SEQDYN_LOG` (default `debug`).
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_env("SEQDYN_LOG").unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
