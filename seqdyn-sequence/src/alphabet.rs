/// Dense integer encoding of categorical labels
use seqdyn_core::{SeqdynError, SeqdynResult};
use std::collections::{BTreeMap, BTreeSet};

/// Sorted set of distinct labels observed across all sequences.
///
/// The code of a label is its position in sorted order, so the same label
/// set always yields the same codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet<L: Ord + Clone> {
    classes: Vec<L>,
    lookup: BTreeMap<L, usize>,
}

/// Encoded sequences together with the alphabet that produced them
#[derive(Debug, Clone)]
pub struct EncodedSequences<L: Ord + Clone> {
    pub alphabet: Alphabet<L>,
    pub sequences: Vec<Vec<usize>>,
}

impl<L: Ord + Clone> Alphabet<L> {
    /// Collect the alphabet of a sequence collection
    pub fn fit(sequences: &[Vec<L>]) -> SeqdynResult<Self> {
        validate_shape(sequences)?;

        let classes: Vec<L> = sequences
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let lookup = classes
            .iter()
            .enumerate()
            .map(|(code, label)| (label.clone(), code))
            .collect();

        Ok(Self { classes, lookup })
    }

    /// Fit the alphabet and encode the same collection in one pass
    pub fn fit_encode(sequences: &[Vec<L>]) -> SeqdynResult<EncodedSequences<L>> {
        let alphabet = Self::fit(sequences)?;
        let sequences = alphabet.encode(sequences)?;
        Ok(EncodedSequences {
            alphabet,
            sequences,
        })
    }

    /// Encode sequences against this alphabet, preserving order and shape
    pub fn encode(&self, sequences: &[Vec<L>]) -> SeqdynResult<Vec<Vec<usize>>> {
        validate_shape(sequences)?;

        sequences
            .iter()
            .enumerate()
            .map(|(i, seq)| {
                seq.iter()
                    .map(|label| {
                        self.code_of(label).ok_or_else(|| {
                            SeqdynError::invalid(format!(
                                "sequence {} contains a label outside the alphabet",
                                i
                            ))
                        })
                    })
                    .collect()
            })
            .collect()
    }

    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    /// Alphabet size
    pub fn k(&self) -> usize {
        self.classes.len()
    }

    pub fn code_of(&self, label: &L) -> Option<usize> {
        self.lookup.get(label).copied()
    }

    pub fn label_of(&self, code: usize) -> Option<&L> {
        self.classes.get(code)
    }

    /// Map codes back to labels
    pub fn decode(&self, codes: &[usize]) -> SeqdynResult<Vec<L>> {
        codes
            .iter()
            .map(|&c| {
                self.label_of(c)
                    .cloned()
                    .ok_or_else(|| SeqdynError::invalid(format!("code {} is outside [0, {})", c, self.k())))
            })
            .collect()
    }
}

fn validate_shape<L>(sequences: &[Vec<L>]) -> SeqdynResult<()> {
    if sequences.is_empty() {
        return Err(SeqdynError::invalid("empty sequence collection"));
    }
    if let Some(i) = sequences.iter().position(|s| s.is_empty()) {
        return Err(SeqdynError::invalid(format!("sequence {} has length zero", i)));
    }
    Ok(())
}
