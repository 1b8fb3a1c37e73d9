pub mod assembler;
pub mod dedup;
pub mod matrix;

pub use assembler::{naive_distance_matrix, Assembly, DistanceAssembler, DEFAULT_PARALLEL_THRESHOLD};
pub use dedup::{SequenceKey, UniqueIndex};
pub use matrix::DistanceMatrix;
