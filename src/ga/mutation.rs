//! Gaussian mutation.
//!
//! Perturbs `rate` distinct gene positions of an individual. Each chosen
//! gene `x` is replaced by a draw from `Normal(x, 1)`; all other genes are
//! untouched. Mutated values are not clamped to the initial sampling
//! limits.

use super::population::Individual;
use rand::Rng;
use rand_distr::StandardNormal;

/// Mutates `rate` distinct, uniformly chosen gene positions in place.
///
/// The configuration layer guarantees `rate <= genes`, so index sampling
/// cannot fail at runtime.
pub(crate) fn mutate<R: Rng>(individual: &mut Individual, rate: usize, rng: &mut R) {
    let genes = individual.len();
    for point in rand::seq::index::sample(rng, genes, rate) {
        let noise: f64 = rng.sample(StandardNormal);
        individual.genes[point] += noise;
    }
}
