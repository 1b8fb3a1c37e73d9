/// Optimal matching: generalized Needleman-Wunsch edit cost
use super::PairwiseDistance;
use crate::costs::CostScheme;

#[derive(Debug, Clone)]
pub struct OptimalMatching {
    costs: CostScheme,
}

impl OptimalMatching {
    pub fn new(costs: CostScheme) -> Self {
        Self { costs }
    }

    pub fn costs(&self) -> &CostScheme {
        &self.costs
    }

    /// Minimal cost of turning `s1` into `s2`.
    ///
    /// `s1` runs along the columns and `s2` along the rows of the DP table,
    /// so substitutions are charged `subs[s1[j]][s2[i]]`. Only the scalar
    /// cost is needed, so two rolling rows replace the full table.
    fn align(&self, s1: &[usize], s2: &[usize], rows: &mut Vec<f64>) -> f64 {
        let indel = self.costs.indel;
        let subs = &self.costs.substitution;
        let width = s1.len() + 1;

        rows.clear();
        rows.resize(2 * width, 0.0);
        let (mut prev, mut curr) = rows.split_at_mut(width);

        for (j, cell) in prev.iter_mut().enumerate() {
            *cell = indel * j as f64;
        }

        for (i, &b) in s2.iter().enumerate() {
            curr[0] = indel * (i + 1) as f64;
            for (j, &a) in s1.iter().enumerate() {
                let diagonal = prev[j] + subs.get(a, b);
                let left = curr[j] + indel;
                let up = prev[j + 1] + indel;
                curr[j + 1] = diagonal.min(left).min(up);
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        prev[s1.len()]
    }
}

impl PairwiseDistance for OptimalMatching {
    type Scratch = Vec<f64>;

    fn distance_with(&self, a: &[usize], b: &[usize], scratch: &mut Vec<f64>) -> f64 {
        self.align(a, b, scratch)
    }

    fn is_symmetric(&self) -> bool {
        self.costs.substitution.is_symmetric()
    }
}
