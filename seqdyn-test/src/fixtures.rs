//! Test fixtures and data generators

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reference sequences of unequal length over {A, C, G, T}
pub const UNEQUAL_DNA: [&str; 3] = ["ACGGTAG", "CCTAAG", "CCTAAGC"];

/// Reference sequences of equal length over {A, C, G, T}
pub const EQUAL_DNA: [&str; 3] = ["ACGGTAG", "CCTAAGA", "CCTAAGC"];

/// Asymmetric substitution costs for the {A, C, G, T} alphabet
pub fn asymmetric_dna_costs() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 0.76, 0.29, 0.05],
        vec![0.30, 0.0, 0.40, 0.60],
        vec![0.16, 0.61, 0.0, 0.26],
        vec![0.38, 0.20, 0.12, 0.0],
    ]
}

/// Split strings into per-character label sequences
pub fn chars(seqs: &[&str]) -> Vec<Vec<char>> {
    seqs.iter().map(|s| s.chars().collect()).collect()
}

/// Synthetic neighborhood-type trajectories.
///
/// Each unit starts in a random type and moves to another with probability
/// `change_rate` per period, so low rates produce many identical (stable)
/// trajectories, as real tract data does.
#[derive(Debug, Clone)]
pub struct TrajectoryGenerator {
    pub types: Vec<String>,
    pub periods: usize,
    pub change_rate: f64,
    /// Allow lengths between `periods / 2` and `periods`
    pub ragged: bool,
}

impl TrajectoryGenerator {
    pub fn new(k: usize, periods: usize) -> Self {
        Self {
            types: (0..k).map(|i| format!("type_{}", i)).collect(),
            periods,
            change_rate: 0.2,
            ragged: false,
        }
    }

    pub fn with_change_rate(mut self, rate: f64) -> Self {
        self.change_rate = rate;
        self
    }

    pub fn ragged(mut self) -> Self {
        self.ragged = true;
        self
    }

    pub fn generate(&self, n: usize, seed: u64) -> Vec<Vec<String>> {
        let mut rng = StdRng::seed_from_u64(seed);
        let k = self.types.len();

        (0..n)
            .map(|_| {
                let len = if self.ragged {
                    rng.gen_range((self.periods / 2).max(1)..=self.periods)
                } else {
                    self.periods
                };
                let mut state = rng.gen_range(0..k);
                (0..len)
                    .map(|_| {
                        if rng.gen_bool(self.change_rate) {
                            state = rng.gen_range(0..k);
                        }
                        self.types[state].clone()
                    })
                    .collect()
            })
            .collect()
    }
}

/// Equal-length trajectories with default settings
pub fn random_trajectories(n: usize, k: usize, periods: usize, seed: u64) -> Vec<Vec<String>> {
    TrajectoryGenerator::new(k, periods).generate(n, seed)
}
