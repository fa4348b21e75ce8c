//! Survivor selection: weighted roulette without replacement.
//!
//! Each round renormalizes the remaining pool's fitness into percentage
//! shares, draws a uniform value in `[0, 100)`, and walks the pool in
//! fitness-descending order subtracting shares until the draw is used up.
//! The selected candidate leaves the pool before the next round, so the
//! same individual can never be selected twice.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::config::ZeroFitnessPolicy;
use super::evaluator::Evaluator;
use super::population::Population;
use rand::Rng;

/// Errors that can occur during survivor selection.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    /// The remaining candidate pool's total fitness is zero or negative,
    /// and the configured policy is [`ZeroFitnessPolicy::Fail`].
    ///
    /// The percentage walk is undefined for a non-positive total; apply a
    /// strictly positive fitness transform (e.g.
    /// [`softplus`](super::softplus)) or switch to
    /// [`ZeroFitnessPolicy::Uniform`].
    #[error("total fitness of the remaining pool is non-positive ({0})")]
    NonPositiveTotalFitness(f64),
}

/// Selects `floor(N/2)` distinct survivor identifiers by weighted roulette
/// without replacement.
///
/// Returns the empty set for populations smaller than 2. Weights are
/// renormalized over the remaining pool each round.
pub(crate) fn select_survivors<R: Rng>(
    population: &Population,
    evaluator: &Evaluator,
    policy: ZeroFitnessPolicy,
    rng: &mut R,
) -> Result<Vec<usize>, SelectionError> {
    let n = population.len();
    if n < 2 {
        return Ok(Vec::new());
    }

    // Pool of (id, fitness), walked in fitness-descending order. Stable
    // sort keeps equal-fitness candidates in identifier order.
    let mut pool: Vec<(usize, f64)> = population
        .individuals()
        .iter()
        .enumerate()
        .map(|(id, individual)| (id, evaluator.fitness(individual)))
        .collect();
    pool.sort_by(|a, b| b.1.total_cmp(&a.1));

    let rounds = n / 2;
    let mut selected = Vec::with_capacity(rounds);

    for _ in 0..rounds {
        let total: f64 = pool.iter().map(|(_, fitness)| fitness).sum();

        let winner = if total <= 0.0 {
            match policy {
                ZeroFitnessPolicy::Fail => {
                    return Err(SelectionError::NonPositiveTotalFitness(total));
                }
                ZeroFitnessPolicy::Uniform => rng.random_range(0..pool.len()),
            }
        } else {
            spin(&pool, total, rng)
        };

        // `remove`, not `swap_remove`: the descending walk order must
        // survive into the next round.
        let (id, _) = pool.remove(winner);
        selected.push(id);
    }

    Ok(selected)
}

/// One roulette spin over the pool. The last index is the floating-point
/// fallback when accumulated shares fall fractionally short of the draw.
fn spin<R: Rng>(pool: &[(usize, f64)], total: f64, rng: &mut R) -> usize {
    let mut draw = rng.random_range(0.0..100.0);
    for (index, (_, fitness)) in pool.iter().enumerate() {
        draw -= fitness / total * 100.0;
        if draw <= 0.0 {
            return index;
        }
    }
    pool.len() - 1
}
