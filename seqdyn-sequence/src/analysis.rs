/// Sequence analysis: from raw label sequences to a pairwise distance matrix
///
/// Ties together label encoding, cost-model resolution and the deduplicating
/// assembler. The resulting matrix is meant to be handed to an external
/// clustering routine.
use crate::alphabet::Alphabet;
use crate::costs::{CostModelBuilder, SubstitutionMatrix, TransitionMatrix};
use crate::distance::{DistanceAssembler, DistanceMatrix, DEFAULT_PARALLEL_THRESHOLD};
use seqdyn_core::{Config, DistanceType, SeqdynResult};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Output of a sequence analysis run
#[derive(Debug, Clone)]
pub struct SequenceDistances<L: Ord + Clone> {
    /// Sorted labels; a label's code is its index here
    pub alphabet: Alphabet<L>,
    /// Input sequences as codes, in input order
    pub encoded: Vec<Vec<usize>>,
    /// Named model used, `None` for a user-supplied cost pair
    pub distance_type: Option<DistanceType>,
    /// Number of distinct sequences actually aligned
    pub unique_count: usize,
    pub distances: DistanceMatrix,
}

impl<L: Ord + Clone> SequenceDistances<L> {
    pub fn classes(&self) -> &[L] {
        self.alphabet.classes()
    }

    pub fn k(&self) -> usize {
        self.alphabet.k()
    }

    /// Number of input sequences
    pub fn n(&self) -> usize {
        self.distances.n()
    }
}

/// Configurable optimal-matching analysis
#[derive(Debug, Clone)]
pub struct SequenceAnalysis {
    costs: CostModelBuilder,
    parallel_threshold: usize,
    cancel: Option<Arc<AtomicBool>>,
}

impl Default for SequenceAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceAnalysis {
    pub fn new() -> Self {
        Self {
            costs: CostModelBuilder::new(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            cancel: None,
        }
    }

    /// Start from the `[analysis]` and `[performance]` sections of a config
    pub fn from_config(config: &Config) -> Self {
        let mut analysis = Self::new().with_parallel_threshold(config.performance.parallel_threshold);
        if let Some(dt) = config.analysis.distance_type {
            analysis = analysis.with_distance_type(dt);
        }
        if let Some(indel) = config.analysis.indel {
            analysis = analysis.with_indel(indel);
        }
        analysis
    }

    pub fn with_distance_type(mut self, distance_type: DistanceType) -> Self {
        self.costs = self.costs.distance_type(distance_type);
        self
    }

    pub fn with_substitution_matrix(mut self, matrix: SubstitutionMatrix) -> Self {
        self.costs = self.costs.substitution_matrix(matrix);
        self
    }

    pub fn with_indel(mut self, indel: f64) -> Self {
        self.costs = self.costs.indel(indel);
        self
    }

    pub fn with_transition_matrix(mut self, transitions: TransitionMatrix) -> Self {
        self.costs = self.costs.transition_matrix(transitions);
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Encode, resolve the cost model and compute the `n x n` distances
    pub fn run<L: Ord + Clone>(&self, sequences: &[Vec<L>]) -> SeqdynResult<SequenceDistances<L>> {
        let start = Instant::now();

        let encoded = Alphabet::fit_encode(sequences)?;
        let k = encoded.alphabet.k();
        let model = self.costs.clone().build(&encoded.sequences, k)?;

        let mut assembler = DistanceAssembler::new(&model.metric)
            .with_parallel_threshold(self.parallel_threshold);
        if let Some(flag) = &self.cancel {
            assembler = assembler.with_cancellation(flag.clone());
        }
        let assembly = assembler.assemble(&model.sequences)?;

        info!(
            "Sequence analysis ({}) finished: n={}, unique={}, k={} in {:?}",
            model
                .distance_type
                .map_or("custom costs", |dt| dt.as_str()),
            sequences.len(),
            assembly.index.unique_count(),
            k,
            start.elapsed()
        );

        Ok(SequenceDistances {
            alphabet: encoded.alphabet,
            encoded: encoded.sequences,
            distance_type: model.distance_type,
            unique_count: assembly.index.unique_count(),
            distances: assembly.matrix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqdyn_core::SeqdynError;

    fn dna(seqs: &[&str]) -> Vec<Vec<char>> {
        seqs.iter().map(|s| s.chars().collect()).collect()
    }

    #[test]
    fn test_run_interval() {
        let result = SequenceAnalysis::new()
            .with_distance_type(DistanceType::Interval)
            .run(&dna(&["ACGGTAG", "CCTAAG", "CCTAAGC"]))
            .unwrap();

        assert_eq!(result.k(), 4);
        assert_eq!(result.classes(), &['A', 'C', 'G', 'T']);
        assert_eq!(result.n(), 3);
        assert_eq!(result.unique_count, 3);
        assert_eq!(result.distances.to_condensed(), vec![7.0, 10.0, 3.0]);
    }

    #[test]
    fn test_run_without_model() {
        let result = SequenceAnalysis::new().run(&dna(&["AC", "CA"]));
        assert!(matches!(result, Err(SeqdynError::MissingModel)));
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.analysis.distance_type = Some(DistanceType::Arbitrary);
        config.analysis.indel = Some(3.0);

        let result = SequenceAnalysis::from_config(&config)
            .run(&dna(&["AC", "AG"]))
            .unwrap();

        assert_eq!(result.distance_type, Some(DistanceType::Arbitrary));
        assert_eq!(result.distances.get(0, 1), 0.5);
    }

    #[test]
    fn test_tran_keeps_input_encoding() {
        let result = SequenceAnalysis::new()
            .with_distance_type(DistanceType::Tran)
            .run(&dna(&["AAC", "CCC"]))
            .unwrap();

        assert_eq!(result.encoded, vec![vec![0, 0, 1], vec![1, 1, 1]]);
        assert_eq!(result.distances.get(0, 1), 1.0);
    }
}
