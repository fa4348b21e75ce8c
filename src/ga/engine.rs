//! Epoch orchestration.
//!
//! [`Genetic`] owns the population, the evaluator, and the random source,
//! and drives one full epoch per [`next_generation`](Genetic::next_generation)
//! call: selection → pairing → crossover → mutation → evaluation →
//! truncation → reindexing.

use super::config::{ConfigError, GeneticConfig};
use super::crossover::recombine;
use super::evaluator::Evaluator;
use super::mutation::mutate;
use super::pairing::pair_groups;
use super::population::{Individual, Population};
use super::selection::{select_survivors, SelectionError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, instrument};

/// An epoch failed; the population is left exactly as it was before the
/// call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeneticError {
    /// Survivor selection failed.
    #[error("survivor selection failed: {0}")]
    Selection(#[from] SelectionError),
}

/// The genetic optimizer.
///
/// Between calls the optimizer is idle; a [`next_generation`] call runs
/// one epoch synchronously and swaps in the new population only on
/// success, so no partial population state is ever observable and an
/// error leaves the previous generation intact.
///
/// Exactly one `Genetic` drives one population; `&mut self` on the epoch
/// entry point enforces single-caller access.
///
/// [`next_generation`]: Genetic::next_generation
#[derive(Debug)]
pub struct Genetic {
    config: GeneticConfig,
    evaluator: Evaluator,
    population: Population,
    rng: StdRng,
}

impl Genetic {
    /// Validates the configuration and seeds the initial population with
    /// the default sum-of-genes evaluator.
    pub fn new(config: GeneticConfig) -> Result<Self, ConfigError> {
        Self::with_evaluator(config, Evaluator::sum())
    }

    /// Like [`new`](Genetic::new), with an injected fitness evaluator.
    pub fn with_evaluator(
        config: GeneticConfig,
        evaluator: Evaluator,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let population = Population::random(
            config.individuals,
            config.genes,
            config.lower_limit,
            config.upper_limit,
            &mut rng,
        );

        Ok(Self {
            config,
            evaluator,
            population,
            rng,
        })
    }

    /// Read access to the current generation; the slice index is the
    /// generation-local identifier.
    pub fn population(&self) -> &[Individual] {
        self.population.individuals()
    }

    /// The configuration this optimizer was built with.
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Runs one epoch in place.
    ///
    /// The working set for truncation is the previous generation plus all
    /// offspring; selected survivors and offspring are mutated, unselected
    /// carry-overs compete unmutated. The top `elite_count` individuals by
    /// fitness become the next generation, reindexed contiguously from 0.
    #[instrument(level = "debug", skip(self), fields(individuals = self.population.len()))]
    pub fn next_generation(&mut self) -> Result<(), GeneticError> {
        let selected = select_survivors(
            &self.population,
            &self.evaluator,
            self.config.zero_fitness_policy,
            &mut self.rng,
        )?;

        let groups = pair_groups(&selected, self.config.group_size, &mut self.rng);

        // Offspring are recombined from un-mutated parents and appended
        // past the previous generation's identifiers.
        let mut working: Vec<Individual> = self.population.individuals().to_vec();
        let offspring_start = working.len();
        for group in &groups {
            let parents: Vec<&Individual> = group
                .iter()
                .map(|&id| &self.population.individuals()[id])
                .collect();
            working.extend(recombine(&parents, self.config.crossover_points, &mut self.rng));
        }

        debug!(
            selected = selected.len(),
            groups = groups.len(),
            offspring = working.len() - offspring_start,
            "epoch pipeline assembled"
        );

        // Mutation hits every originally selected survivor and every
        // offspring; unselected carry-overs drift only via later epochs.
        for &id in &selected {
            mutate(&mut working[id], self.config.mutation_rate, &mut self.rng);
        }
        for individual in &mut working[offspring_start..] {
            mutate(individual, self.config.mutation_rate, &mut self.rng);
        }

        // Truncation: stable descending sort by fitness, keep the elite.
        let mut ranked: Vec<(usize, f64)> = working
            .iter()
            .enumerate()
            .map(|(id, individual)| (id, self.evaluator.fitness(individual)))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let next: Vec<Individual> = ranked
            .iter()
            .take(self.config.elite_count)
            .map(|&(id, _)| working[id].clone())
            .collect();

        debug!(
            retained = next.len(),
            best_fitness = ranked.first().map(|&(_, f)| f),
            "generation replaced"
        );

        self.population.replace(Population::from_individuals(next));
        Ok(())
    }
}
