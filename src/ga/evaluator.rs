//! Fitness evaluation.
//!
//! The default fitness of an individual is the sum of its genes; an
//! optional monotonic transform can be applied to that sum, e.g.
//! [`softplus`] to make every fitness strictly positive for roulette
//! weighting. Higher fitness is better.

use super::population::Individual;

/// A pure, deterministic transform applied to the gene sum.
pub type FitnessTransform = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// Maps an individual to a scalar fitness score.
///
/// Evaluation is pure and deterministic given the individual; results are
/// never cached and may be recomputed freely.
pub struct Evaluator {
    transform: Option<FitnessTransform>,
}

impl Evaluator {
    /// The default evaluator: fitness is the plain sum of genes.
    pub fn sum() -> Self {
        Self { transform: None }
    }

    /// Applies `transform` to the gene sum.
    ///
    /// The transform must be monotonic to preserve fitness ordering, and
    /// pure: same input, same output, no side effects.
    pub fn with_transform(transform: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            transform: Some(Box::new(transform)),
        }
    }

    /// Computes the fitness of an individual.
    pub fn fitness(&self, individual: &Individual) -> f64 {
        let sum: f64 = individual.genes.iter().sum();
        match &self.transform {
            Some(transform) => transform(sum),
            None => sum,
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::sum()
    }
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("transform", &self.transform.as_ref().map(|_| "fn(f64) -> f64"))
            .finish()
    }
}

/// `ln(1 + e^x)`: a smooth, strictly positive, monotonic transform.
///
/// Useful as a fitness transform when roulette selection needs strictly
/// positive weights. Uses `ln_1p` for accuracy near zero.
pub fn softplus(x: f64) -> f64 {
    x.exp().ln_1p()
}
