//! # river-crossing
//!
//! Rule-validated state machine and solvers for a river-crossing logic puzzle.
//!
//! ## Design Principles
//!
//! 1. **Rules Over Code**: No puzzle constraint is hardcoded in the engine.
//!    Levels pick an ordered `RuleSet` and every move is checked against it.
//!
//! 2. **One Transition Function**: Live play and every search share
//!    `engine::transition` and `engine::successors`, so the solver and the
//!    player always see the same moves.
//!
//! 3. **Values, Not Handles**: `GameState` is a plain value with a canonical
//!    hash, used directly as a key in visited and cost maps.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs` for the bank and
//!   boat sets, so enqueuing a state during search is cheap.
//!
//! - **Crossings In State**: The crossing counter is part of `GameState`, which
//!   lets crossing limits be ordinary rules and keeps search costs exact.
//!
//! ## Modules
//!
//! - `core`: Objects, banks, levels, state, actions
//! - `rules`: `Rule` trait, rule sets, difficulty presets
//! - `engine`: Transition function and the live-play `GameEngine`
//! - `search`: Solvability checker and minimum-crossings solvers
//! - `levels`: Level packs (level + rules)
//! - `scoring`: End-of-level rewards

pub mod core;
pub mod rules;
pub mod engine;
pub mod search;
pub mod levels;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    BankSide, GameObject, GameState, LevelBuilder, LevelDefinition, LevelError, LevelIntro, Location,
    ObjectId, ObjectType, PlayerAction,
};

pub use crate::rules::{CategorySafetyRule, Difficulty, Rule, RuleSet, RuleViolation};

pub use crate::engine::GameEngine;

pub use crate::search::{
    check_all, check_one, minimal_crossings, DijkstraSolver, OptimalCrossingsSolver, OptimalSolution,
    SearchStats, SolvabilityReport, ZeroOneBfsSolver,
};

pub use crate::levels::LevelPack;

pub use crate::scoring::LevelResult;
