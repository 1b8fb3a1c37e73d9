use super::PairwiseDistance;

/// Count of positions at which two equal-length sequences differ.
///
/// Length equality is checked when the cost model is built; if lengths do
/// differ here, the overhang counts as mismatches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hamming;

impl PairwiseDistance for Hamming {
    type Scratch = ();

    fn distance_with(&self, a: &[usize], b: &[usize], _scratch: &mut ()) -> f64 {
        let mismatches = a.iter().zip(b).filter(|(x, y)| x != y).count();
        (mismatches + a.len().abs_diff(b.len())) as f64
    }
}
