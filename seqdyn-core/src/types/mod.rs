/// Core types shared across all seqdyn modules
pub mod distance;

pub use distance::DistanceType;
