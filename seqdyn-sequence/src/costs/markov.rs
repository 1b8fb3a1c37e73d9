/// Empirical first-order Markov transition probabilities
use super::matrix::SubstitutionMatrix;
use seqdyn_core::{SeqdynError, SeqdynResult};
use serde::{Deserialize, Serialize};

/// Row-stochastic `k x k` matrix of `state_t -> state_{t+1}` probabilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct TransitionMatrix {
    k: usize,
    probabilities: Vec<f64>,
}

impl TransitionMatrix {
    /// Estimate from pooled consecutive pairs across all sequences.
    ///
    /// Rows for states that never transition out stay all zero.
    pub fn estimate(sequences: &[Vec<usize>], k: usize) -> SeqdynResult<Self> {
        if k == 0 {
            return Err(SeqdynError::invalid("alphabet must contain at least one state"));
        }

        let mut counts = vec![0u64; k * k];
        for (i, seq) in sequences.iter().enumerate() {
            if let Some(&c) = seq.iter().find(|&&c| c >= k) {
                return Err(SeqdynError::invalid(format!(
                    "sequence {} contains code {} outside [0, {})",
                    i, c, k
                )));
            }
            for w in seq.windows(2) {
                counts[w[0] * k + w[1]] += 1;
            }
        }

        let mut probabilities = vec![0.0; k * k];
        for row in 0..k {
            let total: u64 = counts[row * k..(row + 1) * k].iter().sum();
            if total == 0 {
                continue;
            }
            for col in 0..k {
                probabilities[row * k + col] = counts[row * k + col] as f64 / total as f64;
            }
        }

        Ok(Self { k, probabilities })
    }

    /// Accept an externally estimated matrix
    pub fn from_rows(rows: Vec<Vec<f64>>) -> SeqdynResult<Self> {
        let k = rows.len();
        if k == 0 {
            return Err(SeqdynError::invalid("transition matrix is empty"));
        }
        if rows.iter().any(|r| r.len() != k) {
            return Err(SeqdynError::invalid("transition matrix is not square"));
        }
        let probabilities: Vec<f64> = rows.into_iter().flatten().collect();
        if probabilities
            .iter()
            .any(|p| !p.is_finite() || !(0.0..=1.0).contains(p))
        {
            return Err(SeqdynError::invalid(
                "transition probabilities must lie in [0, 1]",
            ));
        }
        Ok(Self { k, probabilities })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.probabilities[from * self.k + to]
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.probabilities.chunks(self.k).map(|r| r.to_vec()).collect()
    }

    /// Substitution costs `(2 - (P[i][j] + P[j][i])) / 2`, zero on the diagonal
    pub fn substitution_costs(&self) -> SubstitutionMatrix {
        SubstitutionMatrix::from_fn(self.k, |i, j| {
            if i == j {
                0.0
            } else {
                (2.0 - (self.get(i, j) + self.get(j, i))) / 2.0
            }
        })
    }
}

impl TryFrom<Vec<Vec<f64>>> for TransitionMatrix {
    type Error = SeqdynError;

    fn try_from(rows: Vec<Vec<f64>>) -> SeqdynResult<Self> {
        Self::from_rows(rows)
    }
}

impl From<TransitionMatrix> for Vec<Vec<f64>> {
    fn from(matrix: TransitionMatrix) -> Self {
        matrix.to_rows()
    }
}
