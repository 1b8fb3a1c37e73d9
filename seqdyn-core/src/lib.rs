//! Core utilities and types shared across all seqdyn crates

pub mod config;
pub mod error;
pub mod parallel;
pub mod types;

// Re-export commonly used types
pub use config::{default_config, load_config, save_config, AnalysisConfig, Config, PerformanceConfig};
pub use error::{SeqdynError, SeqdynResult};
pub use types::DistanceType;

/// Version information for the seqdyn project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
