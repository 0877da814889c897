//! Core puzzle types: objects, banks, levels, state, actions.
//!
//! This module contains the data model shared by the engine and the solvers.
//! Nothing here validates moves; that is the job of `rules`.

pub mod action;
pub mod level;
pub mod object;
pub mod side;
pub mod state;

pub use action::PlayerAction;
pub use level::{LevelBuilder, LevelDefinition, LevelError, LevelIntro, DEFAULT_BOAT_CAPACITY};
pub use object::{GameObject, ObjectId, ObjectType};
pub use side::BankSide;
pub use state::{GameState, Location};
