//! Pairing of selected survivors into mating groups.
//!
//! The selected identifiers are explicitly shuffled and then consumed in
//! consecutive disjoint groups of `group_size`. Shuffling makes the
//! grouping well-defined and reproducible under a seeded RNG, instead of
//! leaning on any container's iteration or removal order.

use rand::seq::SliceRandom;
use rand::Rng;

/// Partitions `selected` into disjoint `group_size`-tuples after a
/// Fisher–Yates shuffle.
///
/// A remainder smaller than `group_size` is dropped from pairing for this
/// epoch; fewer than `group_size` candidates yield an empty result, not an
/// error.
pub(crate) fn pair_groups<R: Rng>(
    selected: &[usize],
    group_size: usize,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    let mut shuffled = selected.to_vec();
    shuffled.shuffle(rng);

    shuffled
        .chunks_exact(group_size)
        .map(|chunk| chunk.to_vec())
        .collect()
}
