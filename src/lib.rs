//! seqdyn: pairwise dissimilarity between categorical time sequences
//!
//! Label sequences (for example neighborhood types observed over census
//! periods) are encoded, aligned with optimal matching under a chosen
//! substitution-cost model, and assembled into an `n x n` distance matrix
//! ready for hierarchical clustering.

pub mod logging;

pub use seqdyn_core::{
    default_config, load_config, save_config, AnalysisConfig, Config, DistanceType,
    PerformanceConfig, SeqdynError, SeqdynResult,
};
pub use seqdyn_sequence::{
    naive_distance_matrix, Alphabet, CostModelBuilder, CostScheme, DistanceAssembler,
    DistanceMatrix, Hamming, OptimalMatching, PairwiseDistance, SequenceAnalysis,
    SequenceDistances, SubstitutionMatrix, TransitionEncoder, TransitionMatrix,
};

use tracing::warn;

/// Build an analysis from a loaded config, sizing the global thread pool.
///
/// The pool can only be sized once per process; later calls keep the
/// existing pool and log a warning.
pub fn analysis_from_config(config: &Config) -> SequenceAnalysis {
    if let Err(e) = seqdyn_core::parallel::configure_thread_pool(config.performance.threads) {
        warn!("Keeping existing thread pool: {}", e);
    }
    SequenceAnalysis::from_config(config)
}
