/// Transition-oriented re-encoding of state sequences
use super::matrix::SubstitutionMatrix;
use seqdyn_core::{SeqdynError, SeqdynResult};

/// Rewrites state sequences as `(previous, current)` transition symbols.
///
/// A transition is coded `prev * k + cur`, where `prev == k` stands for the
/// start sentinel preceding the first period. The transition alphabet has
/// `k * (k + 1)` symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionEncoder {
    k: usize,
}

impl TransitionEncoder {
    /// Encoder over `k` states; `k` must be at least 1
    pub fn new(k: usize) -> SeqdynResult<Self> {
        if k == 0 {
            return Err(SeqdynError::invalid("transition encoder needs at least one state"));
        }
        Ok(Self { k })
    }

    /// Code used for "no previous state"
    pub fn sentinel(&self) -> usize {
        self.k
    }

    pub fn alphabet_size(&self) -> usize {
        self.k * (self.k + 1)
    }

    #[inline]
    pub fn code(&self, prev: usize, cur: usize) -> usize {
        prev * self.k + cur
    }

    /// Split a transition code into `(previous, current)`; `None` marks the sentinel
    pub fn decode(&self, code: usize) -> (Option<usize>, usize) {
        let prev = code / self.k;
        let cur = code % self.k;
        if prev == self.k {
            (None, cur)
        } else {
            (Some(prev), cur)
        }
    }

    /// A transition that stays in the same state
    pub fn is_stable(&self, code: usize) -> bool {
        let (prev, cur) = self.decode(code);
        prev == Some(cur)
    }

    pub fn encode(&self, sequence: &[usize]) -> SeqdynResult<Vec<usize>> {
        let mut prev = self.sentinel();
        sequence
            .iter()
            .map(|&cur| {
                if cur >= self.k {
                    return Err(SeqdynError::invalid(format!(
                        "state code {} is outside [0, {})",
                        cur, self.k
                    )));
                }
                let code = self.code(prev, cur);
                prev = cur;
                Ok(code)
            })
            .collect()
    }

    pub fn encode_all(&self, sequences: &[Vec<usize>]) -> SeqdynResult<Vec<Vec<usize>>> {
        sequences.iter().map(|s| self.encode(s)).collect()
    }

    /// 0 between two stable or two changing transitions, 1 otherwise
    pub fn substitution_costs(&self) -> SubstitutionMatrix {
        let stable: Vec<bool> = (0..self.alphabet_size()).map(|c| self.is_stable(c)).collect();
        SubstitutionMatrix::from_fn(self.alphabet_size(), |i, j| {
            if stable[i] == stable[j] {
                0.0
            } else {
                1.0
            }
        })
    }
}
