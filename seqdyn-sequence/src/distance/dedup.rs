/// Collapsing identical encoded sequences before alignment
use seqdyn_core::{SeqdynError, SeqdynResult};
use sha2::{Digest, Sha256};
use std::collections::hash_map::{Entry, HashMap};
use std::fmt;
use tracing::trace;

/// SHA-256 digest of a length-prefixed code vector.
///
/// Every code is written as a fixed-width integer, so keys never depend on
/// how many digits a code has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequenceKey([u8; 32]);

impl SequenceKey {
    pub fn of(codes: &[usize]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update((codes.len() as u64).to_le_bytes());
        for &code in codes {
            hasher.update((code as u64).to_le_bytes());
        }
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&hasher.finalize());
        Self(digest)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for SequenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}...", &self.to_hex()[..8])
    }
}

/// Maps `n` sequences onto `u <= n` distinct representatives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueIndex {
    /// First-occurrence index of each unique sequence
    representatives: Vec<usize>,
    /// Unique index of every input sequence
    assignment: Vec<usize>,
}

impl UniqueIndex {
    pub fn build(sequences: &[Vec<usize>]) -> SeqdynResult<Self> {
        let mut by_key: HashMap<SequenceKey, usize> = HashMap::with_capacity(sequences.len());
        let mut representatives = Vec::new();
        let mut assignment = Vec::with_capacity(sequences.len());

        for (i, seq) in sequences.iter().enumerate() {
            let key = SequenceKey::of(seq);
            match by_key.entry(key) {
                Entry::Occupied(e) => {
                    let unique = *e.get();
                    let rep = representatives[unique];
                    if sequences[rep] != *seq {
                        return Err(SeqdynError::EncodingCollision {
                            first: rep,
                            second: i,
                        });
                    }
                    trace!("Sequence {} duplicates {} ({})", i, rep, key);
                    assignment.push(unique);
                }
                Entry::Vacant(e) => {
                    e.insert(representatives.len());
                    assignment.push(representatives.len());
                    representatives.push(i);
                }
            }
        }

        Ok(Self {
            representatives,
            assignment,
        })
    }

    /// Number of distinct sequences
    pub fn unique_count(&self) -> usize {
        self.representatives.len()
    }

    pub fn representatives(&self) -> &[usize] {
        &self.representatives
    }

    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }

    pub fn unique_of(&self, i: usize) -> usize {
        self.assignment[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collapses_duplicates() {
        let seqs = vec![vec![0, 1], vec![1, 1], vec![0, 1], vec![2], vec![1, 1]];
        let index = UniqueIndex::build(&seqs).unwrap();

        assert_eq!(index.unique_count(), 3);
        assert_eq!(index.representatives(), &[0, 1, 3]);
        assert_eq!(index.assignment(), &[0, 1, 0, 2, 1]);
        assert_eq!(index.unique_of(4), 1);
    }

    #[test]
    fn test_multi_digit_codes_do_not_collide() {
        // Digit concatenation would render both as "111"
        let seqs = vec![vec![1, 11], vec![11, 1]];
        let index = UniqueIndex::build(&seqs).unwrap();
        assert_eq!(index.unique_count(), 2);

        let seqs = vec![vec![1, 1, 1], vec![11, 1]];
        assert_eq!(UniqueIndex::build(&seqs).unwrap().unique_count(), 2);
    }

    #[test]
    fn test_key_depends_on_length() {
        assert_ne!(SequenceKey::of(&[0]), SequenceKey::of(&[0, 0]));
        assert_eq!(SequenceKey::of(&[3, 2]), SequenceKey::of(&[3, 2]));
        assert_eq!(SequenceKey::of(&[3, 2]).to_hex().len(), 64);
    }

    #[test]
    fn test_all_distinct() {
        let seqs = vec![vec![0], vec![1], vec![2]];
        let index = UniqueIndex::build(&seqs).unwrap();
        assert_eq!(index.unique_count(), 3);
        assert_eq!(index.assignment(), &[0, 1, 2]);
    }
}
