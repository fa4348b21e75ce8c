//! Classic search and optimization algorithms.
//!
//! Small, independent implementations of three textbook algorithms:
//!
//! - **Genetic Algorithm (GA)**: population-based evolutionary optimization
//!   over real-valued gene vectors, with weighted roulette selection,
//!   multi-point recombination, and Gaussian mutation.
//! - **Breadth-First Search (BFS)**: reachability over a manually built
//!   city hierarchy.
//! - **A\***: shortest path over a weighted city graph with an admissible
//!   heuristic.
//!
//! The GA is the fully developed component: a stateful optimizer that
//! evolves a fixed-size population one generation at a time. The two search
//! modules are single-pass traversals with no internal state between calls.
//!
//! # Reproducibility
//!
//! Every stochastic step draws from a single injectable, seedable random
//! source. Construct [`ga::GeneticConfig`] with a seed to make entire runs
//! deterministic.

pub mod ga;
pub mod search;
