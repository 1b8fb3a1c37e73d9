/// Resolution of a distance-model selection into a concrete pair metric
use super::markov::TransitionMatrix;
use super::matrix::{validate_indel, CostScheme, SubstitutionMatrix};
use super::transition::TransitionEncoder;
use crate::alignment::{Hamming, OptimalMatching, PairwiseDistance};
use seqdyn_core::{DistanceType, SeqdynError, SeqdynResult};
use tracing::{debug, warn};

/// Default indel for the arbitrary and markov models
const UNIT_INDEL: f64 = 1.0;
/// Off-diagonal substitution cost of the arbitrary model
const ARBITRARY_COST: f64 = 0.5;
/// Default indel for the transition-oriented model
const TRAN_INDEL: f64 = 2.0;

/// Selects and parameterizes a substitution-cost model.
///
/// An explicit matrix together with an explicit indel bypasses every named
/// model. Otherwise a named model is required, and an explicit indel (if
/// any) overrides that model's default.
#[derive(Debug, Clone, Default)]
pub struct CostModelBuilder {
    distance_type: Option<DistanceType>,
    substitution: Option<SubstitutionMatrix>,
    indel: Option<f64>,
    transitions: Option<TransitionMatrix>,
}

/// The metric to align with, and the sequences it must be applied to
#[derive(Debug)]
pub struct ResolvedModel {
    pub metric: PairMetric,
    /// Input sequences, re-encoded into transitions for the `tran` model
    pub sequences: Vec<Vec<usize>>,
    /// `None` when a user-supplied cost pair was used
    pub distance_type: Option<DistanceType>,
    /// Size of the alphabet the metric operates on
    pub alphabet_size: usize,
}

/// Concrete pairwise metric chosen by the builder
#[derive(Debug)]
pub enum PairMetric {
    Hamming(Hamming),
    Matching(OptimalMatching),
}

impl PairMetric {
    pub fn cost_scheme(&self) -> Option<&CostScheme> {
        match self {
            PairMetric::Hamming(_) => None,
            PairMetric::Matching(om) => Some(om.costs()),
        }
    }
}

impl PairwiseDistance for PairMetric {
    type Scratch = Vec<f64>;

    fn distance_with(&self, a: &[usize], b: &[usize], scratch: &mut Vec<f64>) -> f64 {
        match self {
            PairMetric::Hamming(h) => h.distance_with(a, b, &mut ()),
            PairMetric::Matching(om) => om.distance_with(a, b, scratch),
        }
    }

    fn is_symmetric(&self) -> bool {
        match self {
            PairMetric::Hamming(h) => h.is_symmetric(),
            PairMetric::Matching(om) => om.is_symmetric(),
        }
    }
}

impl CostModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distance_type(mut self, distance_type: DistanceType) -> Self {
        self.distance_type = Some(distance_type);
        self
    }

    pub fn substitution_matrix(mut self, matrix: SubstitutionMatrix) -> Self {
        self.substitution = Some(matrix);
        self
    }

    pub fn indel(mut self, indel: f64) -> Self {
        self.indel = Some(indel);
        self
    }

    /// Reuse an externally estimated transition matrix for the markov model
    pub fn transition_matrix(mut self, transitions: TransitionMatrix) -> Self {
        self.transitions = Some(transitions);
        self
    }

    /// Resolve against encoded sequences over an alphabet of size `k`
    pub fn build(self, sequences: &[Vec<usize>], k: usize) -> SeqdynResult<ResolvedModel> {
        validate_codes(sequences, k)?;
        if let Some(indel) = self.indel {
            validate_indel(indel)?;
        }

        if let (Some(substitution), Some(indel)) = (self.substitution.clone(), self.indel) {
            if let Some(dt) = self.distance_type {
                debug!("Explicit cost pair supplied, ignoring distance type '{}'", dt);
            }
            return Self::explicit(substitution, indel, sequences, k);
        }

        let distance_type = self.distance_type.ok_or(SeqdynError::MissingModel)?;
        if self.substitution.is_some() {
            warn!(
                "Substitution matrix supplied without an indel cost; using the '{}' model instead",
                distance_type
            );
        }

        if distance_type.requires_equal_length() {
            check_equal_lengths(sequences)?;
        }

        let (metric, sequences, alphabet_size) = match distance_type {
            DistanceType::Hamming => {
                if self.indel.is_some() {
                    debug!("Indel cost has no effect under the hamming model");
                }
                (PairMetric::Hamming(Hamming), sequences.to_vec(), k)
            }
            DistanceType::Interval => {
                let indel = self.indel.unwrap_or(k.saturating_sub(1) as f64);
                let scheme = CostScheme::new(SubstitutionMatrix::interval(k), indel)?;
                (matching(scheme), sequences.to_vec(), k)
            }
            DistanceType::Arbitrary => {
                let indel = self.indel.unwrap_or(UNIT_INDEL);
                let scheme = CostScheme::new(SubstitutionMatrix::uniform(k, ARBITRARY_COST), indel)?;
                (matching(scheme), sequences.to_vec(), k)
            }
            DistanceType::Markov => {
                let transitions = match self.transitions {
                    Some(p) if p.k() != k => {
                        return Err(SeqdynError::invalid(format!(
                            "transition matrix is {}x{} but the alphabet has {} symbols",
                            p.k(),
                            p.k(),
                            k
                        )))
                    }
                    Some(p) => p,
                    None => TransitionMatrix::estimate(sequences, k)?,
                };
                let indel = self.indel.unwrap_or(UNIT_INDEL);
                let scheme = CostScheme::new(transitions.substitution_costs(), indel)?;
                (matching(scheme), sequences.to_vec(), k)
            }
            DistanceType::Tran => {
                let encoder = TransitionEncoder::new(k)?;
                let indel = self.indel.unwrap_or(TRAN_INDEL);
                let scheme = CostScheme::new(encoder.substitution_costs(), indel)?;
                (
                    matching(scheme),
                    encoder.encode_all(sequences)?,
                    encoder.alphabet_size(),
                )
            }
        };

        debug!(
            "Resolved '{}' model over an alphabet of {} symbols",
            distance_type, alphabet_size
        );

        Ok(ResolvedModel {
            metric,
            sequences,
            distance_type: Some(distance_type),
            alphabet_size,
        })
    }

    fn explicit(
        substitution: SubstitutionMatrix,
        indel: f64,
        sequences: &[Vec<usize>],
        k: usize,
    ) -> SeqdynResult<ResolvedModel> {
        let scheme = CostScheme::new(substitution, indel)?;
        scheme.check_covers(k)?;

        if !scheme.substitution.is_hollow() {
            warn!("Substitution matrix has a non-zero diagonal");
        }
        if !scheme.substitution.is_symmetric() {
            warn!("Substitution matrix is not symmetric; distances follow input order");
        }

        Ok(ResolvedModel {
            alphabet_size: scheme.substitution.size(),
            metric: matching(scheme),
            sequences: sequences.to_vec(),
            distance_type: None,
        })
    }
}

fn matching(scheme: CostScheme) -> PairMetric {
    PairMetric::Matching(OptimalMatching::new(scheme))
}

fn validate_codes(sequences: &[Vec<usize>], k: usize) -> SeqdynResult<()> {
    if sequences.is_empty() {
        return Err(SeqdynError::invalid("empty sequence collection"));
    }
    if k == 0 {
        return Err(SeqdynError::invalid("alphabet must contain at least one symbol"));
    }
    for (i, seq) in sequences.iter().enumerate() {
        if seq.is_empty() {
            return Err(SeqdynError::invalid(format!("sequence {} has length zero", i)));
        }
        if let Some(&c) = seq.iter().find(|&&c| c >= k) {
            return Err(SeqdynError::invalid(format!(
                "sequence {} contains code {} outside [0, {})",
                i, c, k
            )));
        }
    }
    Ok(())
}

fn check_equal_lengths(sequences: &[Vec<usize>]) -> SeqdynResult<()> {
    let expected = sequences[0].len();
    match sequences.iter().position(|s| s.len() != expected) {
        Some(index) => Err(SeqdynError::UnequalLength {
            expected,
            found: sequences[index].len(),
            index,
        }),
        None => Ok(()),
    }
}
