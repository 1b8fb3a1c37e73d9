//! Custom assertions for distance matrices given as rows

/// Assert two matrices have the same shape and agree within `tolerance`
pub fn assert_matrix_approx_eq(actual: &[Vec<f64>], expected: &[Vec<f64>], tolerance: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Matrix has {} rows, expected {}",
        actual.len(),
        expected.len()
    );

    for (i, (row, expected_row)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(
            row.len(),
            expected_row.len(),
            "Row {} has {} columns, expected {}",
            i,
            row.len(),
            expected_row.len()
        );
        for (j, (a, e)) in row.iter().zip(expected_row).enumerate() {
            assert!(
                (a - e).abs() <= tolerance,
                "Entry ({}, {}) is {}, expected {} (tolerance {})",
                i,
                j,
                a,
                e,
                tolerance
            );
        }
    }
}

/// Assert `m[i][j] == m[j][i]` exactly
pub fn assert_symmetric(m: &[Vec<f64>]) {
    for i in 0..m.len() {
        for j in (i + 1)..m.len() {
            assert_eq!(
                m[i][j].to_bits(),
                m[j][i].to_bits(),
                "Matrix is not symmetric at ({}, {}): {} vs {}",
                i,
                j,
                m[i][j],
                m[j][i]
            );
        }
    }
}

pub fn assert_zero_diagonal(m: &[Vec<f64>]) {
    for (i, row) in m.iter().enumerate() {
        assert_eq!(row[i], 0.0, "Diagonal entry {} is {}", i, row[i]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_within_tolerance() {
        assert_matrix_approx_eq(&[vec![0.0, 1.94]], &[vec![0.0, 1.9400000001]], 1e-6);
    }

    #[test]
    #[should_panic(expected = "Entry (0, 1)")]
    fn test_approx_eq_reports_entry() {
        assert_matrix_approx_eq(&[vec![0.0, 2.0]], &[vec![0.0, 1.0]], 1e-6);
    }

    #[test]
    #[should_panic(expected = "not symmetric")]
    fn test_symmetric_detects_mismatch() {
        assert_symmetric(&[vec![0.0, 1.0], vec![2.0, 0.0]]);
    }

    #[test]
    fn test_zero_diagonal() {
        assert_zero_diagonal(&[vec![0.0, 1.0], vec![1.0, 0.0]]);
    }
}
