/// Full distance matrix from pairwise alignments over unique sequences
use super::dedup::UniqueIndex;
use super::matrix::DistanceMatrix;
use crate::alignment::PairwiseDistance;
use rayon::prelude::*;
use seqdyn_core::parallel::{pair_count, should_parallelize};
use seqdyn_core::{SeqdynError, SeqdynResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Minimum number of unique pairs before alignments are spread over rayon
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Distance matrix together with the deduplication it was built from
#[derive(Debug, Clone)]
pub struct Assembly {
    pub matrix: DistanceMatrix,
    pub index: UniqueIndex,
}

pub struct DistanceAssembler<'a, D: PairwiseDistance> {
    metric: &'a D,
    parallel_threshold: usize,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'a, D: PairwiseDistance> DistanceAssembler<'a, D> {
    pub fn new(metric: &'a D) -> Self {
        Self {
            metric,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            cancel: None,
        }
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Stop between pairs once `flag` is set
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Align every pair of distinct sequences once and expand to `n x n`
    pub fn assemble(&self, sequences: &[Vec<usize>]) -> SeqdynResult<Assembly> {
        if sequences.is_empty() {
            return Err(SeqdynError::invalid("need at least one sequence"));
        }

        let index = UniqueIndex::build(sequences)?;
        let u = index.unique_count();
        let unique: Vec<&[usize]> = index
            .representatives()
            .iter()
            .map(|&r| sequences[r].as_slice())
            .collect();

        info!(
            "Computing distances for {} sequences ({} unique, {} alignments)",
            sequences.len(),
            u,
            if self.metric.is_symmetric() { pair_count(u) } else { u * u.saturating_sub(1) }
        );

        let start = Instant::now();
        let unique_matrix = self.unique_distances(&unique)?;
        debug!("Unique-pair alignments took {:?}", start.elapsed());

        let n = sequences.len();
        let mut matrix = DistanceMatrix::zeros(n);
        for a in 0..n {
            let ua = index.unique_of(a);
            for b in (a + 1)..n {
                let ub = index.unique_of(b);
                if ua != ub {
                    matrix.set_pair(a, b, unique_matrix[ua * u + ub]);
                }
            }
        }

        Ok(Assembly { matrix, index })
    }

    /// `u x u` row-major distances between unique sequences.
    ///
    /// Cell `(x, y)` holds `distance(unique[x], unique[y])`. A symmetric
    /// metric is evaluated once per unordered pair and mirrored; otherwise
    /// both orientations are evaluated.
    fn unique_distances(&self, unique: &[&[usize]]) -> SeqdynResult<Vec<f64>> {
        let u = unique.len();
        let symmetric = self.metric.is_symmetric();

        let pairs: Vec<(usize, usize)> = (0..u)
            .flat_map(|x| {
                let from = if symmetric { x + 1 } else { 0 };
                (from..u).filter(move |&y| y != x).map(move |y| (x, y))
            })
            .collect();

        let metric = self.metric;
        let cancel = self.cancel.as_deref();
        let align = |scratch: &mut D::Scratch, &(x, y): &(usize, usize)| -> SeqdynResult<f64> {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                return Err(SeqdynError::Cancelled);
            }
            Ok(metric.distance_with(unique[x], unique[y], scratch))
        };

        let values: Vec<f64> = if should_parallelize(pairs.len(), self.parallel_threshold) {
            debug!("Aligning {} pairs on {} threads", pairs.len(), rayon::current_num_threads());
            pairs
                .par_iter()
                .map_init(D::Scratch::default, align)
                .collect::<SeqdynResult<Vec<_>>>()?
        } else {
            let mut scratch = D::Scratch::default();
            pairs
                .iter()
                .map(|pair| align(&mut scratch, pair))
                .collect::<SeqdynResult<Vec<_>>>()?
        };

        let mut out = vec![0.0; u * u];
        for (&(x, y), value) in pairs.iter().zip(values) {
            out[x * u + y] = value;
            if symmetric {
                out[y * u + x] = value;
            }
        }
        Ok(out)
    }
}

/// Reference computation over all `n` sequences without deduplication
pub fn naive_distance_matrix<D: PairwiseDistance>(
    metric: &D,
    sequences: &[Vec<usize>],
) -> SeqdynResult<DistanceMatrix> {
    if sequences.is_empty() {
        return Err(SeqdynError::invalid("need at least one sequence"));
    }

    let n = sequences.len();
    let mut matrix = DistanceMatrix::zeros(n);
    let mut scratch = D::Scratch::default();
    for a in 0..n {
        for b in (a + 1)..n {
            let d = metric.distance_with(&sequences[a], &sequences[b], &mut scratch);
            matrix.set_pair(a, b, d);
        }
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::{Hamming, OptimalMatching};
    use crate::costs::{CostScheme, SubstitutionMatrix};
    use pretty_assertions::assert_eq;

    fn interval() -> OptimalMatching {
        OptimalMatching::new(CostScheme::new(SubstitutionMatrix::interval(4), 3.0).unwrap())
    }

    #[test]
    fn test_single_sequence() {
        let om = interval();
        let assembly = DistanceAssembler::new(&om).assemble(&[vec![0, 1]]).unwrap();
        assert_eq!(assembly.matrix.as_rows(), vec![vec![0.0]]);
    }

    #[test]
    fn test_empty_input_rejected() {
        let om = interval();
        let result = DistanceAssembler::new(&om).assemble(&[]);
        assert!(matches!(result, Err(SeqdynError::InvalidInput(_))));
        assert!(naive_distance_matrix(&om, &[]).is_err());
    }

    #[test]
    fn test_duplicates_share_distances() {
        let om = interval();
        let seqs = vec![
            vec![0, 1, 2, 2, 3, 0, 2],
            vec![1, 1, 3, 0, 0, 2],
            vec![0, 1, 2, 2, 3, 0, 2],
            vec![1, 1, 3, 0, 0, 2, 1],
        ];
        let assembly = DistanceAssembler::new(&om).assemble(&seqs).unwrap();

        assert_eq!(assembly.index.unique_count(), 3);
        assert_eq!(assembly.matrix.get(0, 2), 0.0);
        assert_eq!(assembly.matrix.get(2, 1), 7.0);
        assert_eq!(assembly.matrix.get(2, 3), 10.0);
        assert_eq!(assembly.matrix, naive_distance_matrix(&om, &seqs).unwrap());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let om = interval();
        let seqs: Vec<Vec<usize>> = (0..30)
            .map(|i| (0..(5 + i % 4)).map(|t| (i * 7 + t * 3) % 4).collect())
            .collect();

        let sequential = DistanceAssembler::new(&om)
            .with_parallel_threshold(usize::MAX)
            .assemble(&seqs)
            .unwrap();
        let parallel = DistanceAssembler::new(&om)
            .with_parallel_threshold(0)
            .assemble(&seqs)
            .unwrap();

        assert_eq!(sequential.matrix, parallel.matrix);
    }

    #[test]
    fn test_asymmetric_metric_matches_naive() {
        let subs = SubstitutionMatrix::from_rows(vec![
            vec![0.0, 0.76, 0.29, 0.05],
            vec![0.30, 0.0, 0.40, 0.60],
            vec![0.16, 0.61, 0.0, 0.26],
            vec![0.38, 0.20, 0.12, 0.0],
        ])
        .unwrap();
        let om = OptimalMatching::new(CostScheme::new(subs, 0.76).unwrap());

        // Later duplicates of an earlier unique sequence flip pair orientation
        let seqs = vec![
            vec![1, 1, 3, 0, 0, 2],
            vec![0, 1, 2, 2, 3, 0, 2],
            vec![1, 1, 3, 0, 0, 2],
            vec![1, 1, 3, 0, 0, 2, 1],
            vec![0, 1, 2, 2, 3, 0, 2],
        ];

        let assembly = DistanceAssembler::new(&om).assemble(&seqs).unwrap();
        assert_eq!(assembly.matrix, naive_distance_matrix(&om, &seqs).unwrap());
        assert!(assembly.matrix.is_symmetric());
    }

    #[test]
    fn test_hamming_metric() {
        let seqs = vec![vec![0, 1, 2], vec![0, 2, 2], vec![3, 2, 1]];
        let assembly = DistanceAssembler::new(&Hamming).assemble(&seqs).unwrap();
        assert_eq!(assembly.matrix.to_condensed(), vec![1.0, 3.0, 2.0]);
    }

    #[test]
    fn test_cancellation() {
        let om = interval();
        let flag = Arc::new(AtomicBool::new(true));
        let seqs = vec![vec![0, 1], vec![1, 1]];

        let result = DistanceAssembler::new(&om)
            .with_cancellation(flag.clone())
            .assemble(&seqs);
        assert!(matches!(result, Err(SeqdynError::Cancelled)));

        flag.store(false, Ordering::Relaxed);
        let result = DistanceAssembler::new(&om).with_cancellation(flag).assemble(&seqs);
        assert!(result.is_ok());
    }
}
