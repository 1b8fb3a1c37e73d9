pub mod builder;
pub mod markov;
pub mod matrix;
pub mod transition;

pub use builder::{CostModelBuilder, PairMetric, ResolvedModel};
pub use markov::TransitionMatrix;
pub use matrix::{CostScheme, SubstitutionMatrix};
pub use transition::TransitionEncoder;
