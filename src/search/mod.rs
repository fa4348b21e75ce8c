//! Classic graph-traversal demos.
//!
//! Two independent, single-pass search algorithms over city maps:
//!
//! - [`Tree`]: breadth-first reachability over a manually built city
//!   hierarchy.
//! - [`Graph`]: A* shortest path over a weighted, optionally bidirectional
//!   city graph.
//!
//! Both are implemented iteratively with explicit frontier and visited
//! bookkeeping; neither recurses nor copies partial paths per visited
//! node.
//!
//! # References
//!
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, ch. 3

mod graph;
mod tree;

pub use graph::{Edge, Graph};
pub use tree::Tree;
