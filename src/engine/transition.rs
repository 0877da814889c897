//! The transition function shared by the engine and both solvers.
//!
//! `apply` is total: it never checks whether an action makes sense, it just
//! computes the state the action would produce. Deciding whether that state
//! is allowed is the rule layer's job. `try_apply` is the guarded variant for
//! callers that want to skip impossible actions without consulting rules.

use crate::core::{GameState, LevelDefinition, PlayerAction};

/// Compute the state produced by an action.
///
/// - `LoadToBoat(id)`: remove `id` from the docked bank, add it to the cargo
/// - `UnloadFromBoat(id)`: remove `id` from the cargo, add it to the docked bank
/// - `Sail`: flip the boat side, increment `crossings`
#[must_use]
pub fn apply(state: &GameState, action: PlayerAction) -> GameState {
    let mut next = state.clone();
    let side = state.boat_side();

    match action {
        PlayerAction::LoadToBoat(id) => {
            next.bank_mut(side).remove(&id);
            next.boat_cargo_mut().insert(id);
        }
        PlayerAction::UnloadFromBoat(id) => {
            next.boat_cargo_mut().remove(&id);
            next.bank_mut(side).insert(id);
        }
        PlayerAction::Sail => next.sail(),
    }

    next
}

/// Like `apply`, but returns `None` when the action is physically impossible:
/// loading an object that is not on the docked bank or into a full boat,
/// unloading an object that is not aboard, or sailing an empty boat.
#[must_use]
pub fn try_apply(level: &LevelDefinition, state: &GameState, action: PlayerAction) -> Option<GameState> {
    let possible = match action {
        PlayerAction::LoadToBoat(id) => {
            state.docked_bank().contains(&id) && state.boat_cargo().len() < level.boat_capacity()
        }
        PlayerAction::UnloadFromBoat(id) => state.boat_cargo().contains(&id),
        PlayerAction::Sail => !state.boat_cargo().is_empty(),
    };

    possible.then(|| apply(state, action))
}
