//! Optimal-matching distances between categorical time sequences

pub mod alignment;
pub mod alphabet;
pub mod analysis;
pub mod costs;
pub mod distance;

// Re-export commonly used types
pub use alignment::{Hamming, OptimalMatching, PairwiseDistance};
pub use alphabet::{Alphabet, EncodedSequences};
pub use analysis::{SequenceAnalysis, SequenceDistances};
pub use costs::{
    CostModelBuilder, CostScheme, PairMetric, ResolvedModel, SubstitutionMatrix, TransitionEncoder,
    TransitionMatrix,
};
pub use distance::{naive_distance_matrix, DistanceAssembler, DistanceMatrix, UniqueIndex};
