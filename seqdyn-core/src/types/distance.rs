//! Named substitution-cost regimes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::SeqdynError;

/// Theory behind the substitution costs used for optimal matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceType {
    /// Ordinal alphabet: cost is the code difference
    Interval,
    /// Positional mismatch count, equal lengths only
    Hamming,
    /// Uniform off-diagonal cost
    Arbitrary,
    /// Costs derived from empirical transition probabilities
    Markov,
    /// Stable/changing transitions over a re-encoded alphabet
    Tran,
}

impl DistanceType {
    pub const ALL: [DistanceType; 5] = [
        Self::Interval,
        Self::Hamming,
        Self::Arbitrary,
        Self::Markov,
        Self::Tran,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interval => "interval",
            Self::Hamming => "hamming",
            Self::Arbitrary => "arbitrary",
            Self::Markov => "markov",
            Self::Tran => "tran",
        }
    }

    /// Whether this model needs every sequence to share one length
    pub fn requires_equal_length(&self) -> bool {
        matches!(self, Self::Hamming)
    }
}

impl fmt::Display for DistanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DistanceType {
    type Err = SeqdynError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interval" => Ok(Self::Interval),
            "hamming" => Ok(Self::Hamming),
            "arbitrary" => Ok(Self::Arbitrary),
            "markov" => Ok(Self::Markov),
            "tran" | "transition" => Ok(Self::Tran),
            other => Err(SeqdynError::invalid(format!(
                "unknown distance type '{}'",
                other
            ))),
        }
    }
}
