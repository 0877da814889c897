//! State transitions and live play.
//!
//! - `transition`: the pure `state × action → state` function
//! - `successors`: rule-valid moves out of a state
//! - `game`: `GameEngine`, the transactional wrapper used during play

pub mod game;
pub mod successors;
pub mod transition;

pub use game::{GameEngine, INVALID_MOVE};
pub use successors::{candidate_actions, successors, Successor};
