//! State-space search over river-crossing levels.
//!
//! All searches walk the same implicit graph: nodes are `GameState`s, edges
//! are the rule-valid moves produced by [`successors`]. States are
//! deduplicated by [`visit::visit_key`].
//!
//! - [`check_one`] / [`check_all`]: BFS solvability with a witness path
//! - [`ZeroOneBfsSolver`]: minimum crossings (loads are free, sails cost 1)
//! - [`DijkstraSolver`]: the same answer by a slower, simpler route

pub mod optimal;
pub mod solvability;
pub mod stats;
pub mod visit;

pub use optimal::{minimal_crossings, DijkstraSolver, OptimalCrossingsSolver, OptimalSolution, ZeroOneBfsSolver};
pub use solvability::{check_all, check_one, SolvabilityReport};
pub use stats::SearchStats;
pub use crate::engine::successors::{candidate_actions, successors, Successor};
