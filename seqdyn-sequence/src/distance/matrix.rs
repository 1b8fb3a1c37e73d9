use seqdyn_core::{SeqdynError, SeqdynResult};
use serde::{Deserialize, Serialize};

/// Dense `n x n` pairwise distance matrix, row-major.
///
/// Built by the assembler, which keeps it symmetric with a zero diagonal.
/// Deserialized matrices are held to the same invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DistanceMatrix {
    n: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    pub(crate) fn zeros(n: usize) -> Self {
        Self {
            n,
            values: vec![0.0; n * n],
        }
    }

    pub(crate) fn set_pair(&mut self, i: usize, j: usize, value: f64) {
        self.values[i * self.n + j] = value;
        self.values[j * self.n + i] = value;
    }

    /// Rebuild from rows, e.g. a matrix saved by an earlier run
    pub fn from_rows(rows: Vec<Vec<f64>>) -> SeqdynResult<Self> {
        let n = rows.len();
        if let Some(i) = rows.iter().position(|r| r.len() != n) {
            return Err(SeqdynError::invalid(format!(
                "distance matrix is not square: row {} has {} columns, expected {}",
                i,
                rows[i].len(),
                n
            )));
        }

        let matrix = Self {
            n,
            values: rows.into_iter().flatten().collect(),
        };
        if let Some(pos) = matrix.values.iter().position(|v| !v.is_finite() || *v < 0.0) {
            return Err(SeqdynError::invalid(format!(
                "distance at ({}, {}) must be finite and non-negative, got {}",
                pos / n,
                pos % n,
                matrix.values[pos]
            )));
        }
        if (0..n).any(|i| matrix.get(i, i) != 0.0) {
            return Err(SeqdynError::invalid("distance matrix has a non-zero diagonal"));
        }
        if !matrix.is_symmetric() {
            return Err(SeqdynError::invalid("distance matrix is not symmetric"));
        }
        Ok(matrix)
    }

    /// Number of sequences
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }

    pub fn as_rows(&self) -> Vec<Vec<f64>> {
        (0..self.n).map(|i| self.row(i).to_vec()).collect()
    }

    /// Upper triangle in row order, the layout hierarchical clustering expects
    pub fn to_condensed(&self) -> Vec<f64> {
        let mut condensed = Vec::with_capacity(self.n * self.n.saturating_sub(1) / 2);
        for i in 0..self.n {
            condensed.extend_from_slice(&self.row(i)[i + 1..]);
        }
        condensed
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = SeqdynError;

    fn try_from(rows: Vec<Vec<f64>>) -> SeqdynResult<Self> {
        Self::from_rows(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DistanceMatrix) -> Self {
        matrix.as_rows()
    }
}
