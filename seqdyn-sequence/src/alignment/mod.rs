pub mod hamming;
pub mod om_aligner;

pub use hamming::Hamming;
pub use om_aligner::OptimalMatching;

/// A dissimilarity between two encoded sequences.
///
/// `Scratch` is per-worker working memory reused across pairs, so parallel
/// callers allocate one per thread instead of one per alignment.
pub trait PairwiseDistance: Send + Sync {
    type Scratch: Default + Send;

    fn distance_with(&self, a: &[usize], b: &[usize], scratch: &mut Self::Scratch) -> f64;

    fn distance(&self, a: &[usize], b: &[usize]) -> f64 {
        let mut scratch = Self::Scratch::default();
        self.distance_with(a, b, &mut scratch)
    }

    /// Whether `distance(a, b) == distance(b, a)` for all inputs
    fn is_symmetric(&self) -> bool {
        true
    }
}
