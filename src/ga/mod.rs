//! Genetic Algorithm optimizer.
//!
//! A stateful optimizer over fixed-length real-valued gene vectors. Each
//! call to [`Genetic::next_generation`] runs one epoch of the classic
//! pipeline: selection → pairing → crossover → mutation → evaluation →
//! truncation → reindexing.
//!
//! # Key Types
//!
//! - [`GeneticConfig`]: population and operator parameters
//! - [`Genetic`]: owns the population and drives the epoch pipeline
//! - [`Evaluator`]: sum-of-genes fitness with an optional monotonic transform
//! - [`Population`] / [`Individual`]: the arena of candidate solutions
//!
//! # Example
//!
//! ```
//! use evo_search::ga::{Genetic, GeneticConfig};
//!
//! let config = GeneticConfig::new(10, 5, -5.0, 5.0).with_seed(42);
//! let mut ga = Genetic::new(config).unwrap();
//! ga.next_generation().unwrap();
//! assert_eq!(ga.population().len(), 10);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod crossover;
mod engine;
mod evaluator;
mod mutation;
mod pairing;
mod population;
mod selection;

pub use config::{ConfigError, GeneticConfig, ZeroFitnessPolicy};
pub use engine::{Genetic, GeneticError};
pub use evaluator::{softplus, Evaluator};
pub use population::{Individual, Population};
pub use selection::SelectionError;
