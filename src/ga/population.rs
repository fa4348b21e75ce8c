//! Population arena.
//!
//! Individuals live in a contiguous array; the per-generation identifier
//! is simply the array index. Identifiers are reassigned every generation,
//! so reindexing after truncation is a plain array copy.

use rand::Rng;

/// A candidate solution: an ordered, fixed-length sequence of real-valued
/// genes.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    /// The gene values. Length is fixed for the optimizer's lifetime.
    pub genes: Vec<f64>,
}

impl Individual {
    /// Creates an individual from its gene values.
    pub fn new(genes: Vec<f64>) -> Self {
        Self { genes }
    }

    /// Creates an individual with `genes` values sampled i.i.d. uniformly
    /// from `[lower, upper]`.
    pub fn random<R: Rng>(genes: usize, lower: f64, upper: f64, rng: &mut R) -> Self {
        let genes = (0..genes)
            .map(|_| lower + rng.random_range(0.0..1.0) * (upper - lower))
            .collect();
        Self { genes }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// True when the individual carries no genes. Never the case for
    /// individuals produced by a validated configuration.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

/// The current generation's individuals.
///
/// Size is fixed across generations once construction and truncation have
/// run; no entity correlates an individual across generations.
#[derive(Debug, Clone, Default)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates a population of `n` individuals, each with `genes` genes
    /// sampled uniformly from `[lower, upper]`.
    pub fn random<R: Rng>(n: usize, genes: usize, lower: f64, upper: f64, rng: &mut R) -> Self {
        let individuals = (0..n)
            .map(|_| Individual::random(genes, lower, upper, rng))
            .collect();
        Self { individuals }
    }

    /// Wraps an existing set of individuals.
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Returns the individual with the given generation-local identifier,
    /// or `None` if the identifier is stale or out of range.
    pub fn get(&self, id: usize) -> Option<&Individual> {
        self.individuals.get(id)
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// True when the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Read access to all individuals; the slice index is the
    /// generation-local identifier.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Replaces the whole population with the next generation.
    pub fn replace(&mut self, next: Population) {
        self.individuals = next.individuals;
    }
}
