/// Substitution-cost matrices and the cost scheme fed to the aligner
use seqdyn_core::{SeqdynError, SeqdynResult};
use serde::{Deserialize, Serialize};

/// Square matrix of substitution costs indexed by symbol code.
///
/// Serialized as nested rows; deserialization goes through `from_rows`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct SubstitutionMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SubstitutionMatrix {
    /// Build from nested rows; rows must form a square matrix
    pub fn from_rows(rows: Vec<Vec<f64>>) -> SeqdynResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(SeqdynError::invalid("substitution matrix is empty"));
        }
        if let Some(i) = rows.iter().position(|r| r.len() != size) {
            return Err(SeqdynError::invalid(format!(
                "substitution matrix is not square: row {} has {} columns, expected {}",
                i,
                rows[i].len(),
                size
            )));
        }

        let matrix = Self {
            size,
            values: rows.into_iter().flatten().collect(),
        };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Check that every cost is finite and non-negative
    pub fn validate(&self) -> SeqdynResult<()> {
        if let Some(pos) = self.values.iter().position(|v| !v.is_finite() || *v < 0.0) {
            return Err(SeqdynError::invalid(format!(
                "substitution cost at ({}, {}) must be finite and non-negative, got {}",
                pos / self.size,
                pos % self.size,
                self.values[pos]
            )));
        }
        Ok(())
    }

    /// Fill a `size x size` matrix from a cost function.
    ///
    /// Entries are not checked here; `CostScheme::new` validates them.
    pub fn from_fn(size: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let mut values = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                values.push(f(i, j));
            }
        }
        Self { size, values }
    }

    /// `|i - j|` costs for an ordinal alphabet
    pub fn interval(k: usize) -> Self {
        Self::from_fn(k, |i, j| i.abs_diff(j) as f64)
    }

    /// Constant off-diagonal cost, zero diagonal
    pub fn uniform(k: usize, cost: f64) -> Self {
        Self::from_fn(k, |i, j| if i == j { 0.0 } else { cost })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Zero diagonal
    pub fn is_hollow(&self) -> bool {
        (0..self.size).all(|i| self.get(i, i) == 0.0)
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values.chunks(self.size).map(|r| r.to_vec()).collect()
    }
}

/// Substitution matrix plus the uniform insertion/deletion cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCostScheme")]
pub struct CostScheme {
    pub substitution: SubstitutionMatrix,
    pub indel: f64,
}

impl CostScheme {
    pub fn new(substitution: SubstitutionMatrix, indel: f64) -> SeqdynResult<Self> {
        substitution.validate()?;
        validate_indel(indel)?;
        Ok(Self {
            substitution,
            indel,
        })
    }

    /// Check that every code of an alphabet of size `k` can be looked up
    pub fn check_covers(&self, k: usize) -> SeqdynResult<()> {
        if self.substitution.size() < k {
            return Err(SeqdynError::invalid(format!(
                "substitution matrix is {}x{} but the alphabet has {} symbols",
                self.substitution.size(),
                self.substitution.size(),
                k
            )));
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<f64>>> for SubstitutionMatrix {
    type Error = SeqdynError;

    fn try_from(rows: Vec<Vec<f64>>) -> SeqdynResult<Self> {
        Self::from_rows(rows)
    }
}

impl From<SubstitutionMatrix> for Vec<Vec<f64>> {
    fn from(matrix: SubstitutionMatrix) -> Self {
        matrix.to_rows()
    }
}

#[derive(Deserialize)]
struct RawCostScheme {
    substitution: SubstitutionMatrix,
    indel: f64,
}

impl TryFrom<RawCostScheme> for CostScheme {
    type Error = SeqdynError;

    fn try_from(raw: RawCostScheme) -> SeqdynResult<Self> {
        Self::new(raw.substitution, raw.indel)
    }
}

pub(crate) fn validate_indel(indel: f64) -> SeqdynResult<()> {
    if !indel.is_finite() || indel < 0.0 {
        return Err(SeqdynError::invalid(format!(
            "indel cost must be finite and non-negative, got {}",
            indel
        )));
    }
    Ok(())
}
