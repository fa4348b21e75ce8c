//! Multi-point recombination.
//!
//! A mating group of K parents produces K children. P distinct cut points
//! are sampled and sorted; child `i` starts as a copy of parent `i`, and at
//! the `j`-th cut point its tail is overwritten with the tail of parent
//! `(i + j + 1) mod K`. Applied in ascending cut order this interleaves
//! gene segments cyclically across the whole parent tuple: the segment
//! between consecutive cuts comes from each successive parent in turn.

use super::population::Individual;
use rand::Rng;

/// Recombines a parent group into one child per parent, sampling
/// `num_points` distinct cut points from `0..genes`.
///
/// The configuration layer guarantees `num_points < genes`, so sampling
/// cannot fail at runtime.
pub(crate) fn recombine<R: Rng>(
    parents: &[&Individual],
    num_points: usize,
    rng: &mut R,
) -> Vec<Individual> {
    let genes = parents[0].len();
    let mut points = rand::seq::index::sample(rng, genes, num_points).into_vec();
    points.sort_unstable();
    recombine_at(parents, &points)
}

/// The deterministic recombination core: `points` must be sorted ascending
/// and within `0..genes`.
pub(crate) fn recombine_at(parents: &[&Individual], points: &[usize]) -> Vec<Individual> {
    let k = parents.len();

    (0..k)
        .map(|i| {
            let mut child = parents[i].clone();
            for (j, &point) in points.iter().enumerate() {
                let donor = parents[(i + j + 1) % k];
                child.genes[point..].copy_from_slice(&donor.genes[point..]);
            }
            child
        })
        .collect()
}
