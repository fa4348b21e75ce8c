//! GA configuration.
//!
//! [`GeneticConfig`] holds all parameters that control population seeding
//! and the epoch pipeline.

/// Policy for a selection round whose remaining candidate pool has a
/// non-positive total fitness.
///
/// The roulette walk divides each candidate's fitness by the pool total;
/// a zero (or negative) total makes that walk meaningless, so the outcome
/// must be an explicit decision rather than an arithmetic fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZeroFitnessPolicy {
    /// Fall back to a uniform random draw from the remaining pool.
    ///
    /// The safe default: the default sum-of-genes fitness can legitimately
    /// total zero or negative with symmetric gene limits.
    #[default]
    Uniform,

    /// Surface a [`SelectionError`](super::SelectionError) to the caller.
    ///
    /// Choose this when fitness is guaranteed positive (e.g. via
    /// [`softplus`](super::softplus)) and a non-positive total indicates
    /// a bug in the fitness function.
    Fail,
}

/// Configuration rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `individuals` must be at least 1.
    #[error("population must hold at least one individual")]
    NoIndividuals,

    /// `genes` must be at least 1.
    #[error("individuals must carry at least one gene")]
    NoGenes,

    /// `lower_limit` must not exceed `upper_limit`.
    #[error("lower_limit must not exceed upper_limit")]
    InvertedLimits,

    /// Crossover needs at least one cut point, and strictly fewer cut
    /// points than genes; sampling more distinct positions than exist is
    /// impossible.
    #[error("crossover_points must be in 1..genes, got {points} for {genes} genes")]
    InvalidCrossoverPoints { points: usize, genes: usize },

    /// Mutation must touch between 1 and `genes` distinct positions.
    #[error("mutation_rate must be in 1..=genes, got {rate} for {genes} genes")]
    InvalidMutationRate { rate: usize, genes: usize },

    /// Mating groups need at least two parents.
    #[error("group_size must be at least 2, got {0}")]
    GroupTooSmall(usize),

    /// The retained elite must be non-empty and cannot exceed the
    /// configured population size, or the post-epoch size invariant
    /// would be unsatisfiable.
    #[error("elite_count must be in 1..=individuals, got {elite} for {individuals} individuals")]
    InvalidEliteCount { elite: usize, individuals: usize },
}

/// Configuration for the genetic optimizer.
///
/// # Defaults
///
/// ```
/// use evo_search::ga::GeneticConfig;
///
/// let config = GeneticConfig::new(10, 5, -5.0, 5.0);
/// assert_eq!(config.crossover_points, 2);
/// assert_eq!(config.mutation_rate, 1);
/// assert_eq!(config.group_size, 2);
/// assert_eq!(config.elite_count, 10); // defaults to `individuals`
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evo_search::ga::{GeneticConfig, ZeroFitnessPolicy};
///
/// let config = GeneticConfig::new(20, 8, 0.0, 1.0)
///     .with_crossover_points(3)
///     .with_elite_count(10)
///     .with_zero_fitness_policy(ZeroFitnessPolicy::Fail)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneticConfig {
    /// Number of individuals in the population. Fixed across generations
    /// while `elite_count` keeps its default.
    pub individuals: usize,

    /// Number of genes per individual. Fixed for the optimizer's lifetime.
    pub genes: usize,

    /// Lower bound for initial uniform gene sampling.
    ///
    /// Not re-enforced after mutation; evolved genes may drift outside
    /// `[lower_limit, upper_limit]`.
    pub lower_limit: f64,

    /// Upper bound for initial uniform gene sampling.
    pub upper_limit: f64,

    /// Number of crossover cut points. Must be in `1..genes`.
    pub crossover_points: usize,

    /// Number of distinct gene positions perturbed per mutation.
    /// Must be in `1..=genes`.
    pub mutation_rate: usize,

    /// Parents per mating group. Must be at least 2.
    pub group_size: usize,

    /// Number of top-fitness individuals retained into the next
    /// generation. Defaults to `individuals`.
    pub elite_count: usize,

    /// What to do when a selection round's pool total fitness is
    /// non-positive.
    pub zero_fitness_policy: ZeroFitnessPolicy,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl GeneticConfig {
    /// Creates a configuration with the given population shape and initial
    /// sampling limits; operator parameters take their defaults.
    pub fn new(individuals: usize, genes: usize, lower_limit: f64, upper_limit: f64) -> Self {
        Self {
            individuals,
            genes,
            lower_limit,
            upper_limit,
            crossover_points: 2,
            mutation_rate: 1,
            group_size: 2,
            elite_count: individuals,
            zero_fitness_policy: ZeroFitnessPolicy::default(),
            seed: None,
        }
    }

    /// Sets the number of crossover cut points.
    pub fn with_crossover_points(mut self, points: usize) -> Self {
        self.crossover_points = points;
        self
    }

    /// Sets the number of gene positions perturbed per mutation.
    pub fn with_mutation_rate(mut self, rate: usize) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of parents per mating group.
    pub fn with_group_size(mut self, size: usize) -> Self {
        self.group_size = size;
        self
    }

    /// Sets the number of individuals retained after truncation.
    pub fn with_elite_count(mut self, count: usize) -> Self {
        self.elite_count = count;
        self
    }

    /// Sets the policy for non-positive total fitness during selection.
    pub fn with_zero_fitness_policy(mut self, policy: ZeroFitnessPolicy) -> Self {
        self.zero_fitness_policy = policy;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// All parameter combinations that would make an operator impossible
    /// (e.g. more cut points than gene positions) are rejected here, never
    /// as a runtime sampling failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.individuals == 0 {
            return Err(ConfigError::NoIndividuals);
        }
        if self.genes == 0 {
            return Err(ConfigError::NoGenes);
        }
        if self.lower_limit > self.upper_limit {
            return Err(ConfigError::InvertedLimits);
        }
        if self.crossover_points == 0 || self.crossover_points >= self.genes {
            return Err(ConfigError::InvalidCrossoverPoints {
                points: self.crossover_points,
                genes: self.genes,
            });
        }
        if self.mutation_rate == 0 || self.mutation_rate > self.genes {
            return Err(ConfigError::InvalidMutationRate {
                rate: self.mutation_rate,
                genes: self.genes,
            });
        }
        if self.group_size < 2 {
            return Err(ConfigError::GroupTooSmall(self.group_size));
        }
        if self.elite_count == 0 || self.elite_count > self.individuals {
            return Err(ConfigError::InvalidEliteCount {
                elite: self.elite_count,
                individuals: self.individuals,
            });
        }
        Ok(())
    }
}
