//! Player actions.
//!
//! The player can only do three things:
//! - Load an object from the bank where the boat is docked into the boat
//! - Unload an object from the boat onto the bank where it is docked
//! - Sail the boat to the opposite bank
//!
//! Only sailing counts as a crossing, so only `Sail` has a crossing cost.

use serde::{Deserialize, Serialize};

use super::object::ObjectId;

/// A single player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Move an object from the docked bank into the boat.
    LoadToBoat(ObjectId),
    /// Move an object from the boat onto the docked bank.
    UnloadFromBoat(ObjectId),
    /// Move the boat to the opposite bank.
    Sail,
}

impl PlayerAction {
    /// Crossings this action adds: 1 for `Sail`, 0 otherwise.
    #[must_use]
    pub const fn crossing_cost(self) -> u32 {
        match self {
            PlayerAction::Sail => 1,
            PlayerAction::LoadToBoat(_) | PlayerAction::UnloadFromBoat(_) => 0,
        }
    }

    /// The object this action moves, if any.
    #[must_use]
    pub const fn object(self) -> Option<ObjectId> {
        match self {
            PlayerAction::LoadToBoat(id) | PlayerAction::UnloadFromBoat(id) => Some(id),
            PlayerAction::Sail => None,
        }
    }

    #[must_use]
    pub const fn is_sail(self) -> bool {
        matches!(self, PlayerAction::Sail)
    }
}

impl std::fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerAction::LoadToBoat(id) => write!(f, "load {}", id),
            PlayerAction::UnloadFromBoat(id) => write!(f, "unload {}", id),
            PlayerAction::Sail => f.write_str("sail"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossing_cost() {
        assert_eq!(PlayerAction::Sail.crossing_cost(), 1);
        assert_eq!(PlayerAction::LoadToBoat(ObjectId(1)).crossing_cost(), 0);
        assert_eq!(PlayerAction::UnloadFromBoat(ObjectId(1)).crossing_cost(), 0);
    }

    #[test]
    fn test_object() {
        assert_eq!(PlayerAction::LoadToBoat(ObjectId(4)).object(), Some(ObjectId(4)));
        assert_eq!(PlayerAction::UnloadFromBoat(ObjectId(2)).object(), Some(ObjectId(2)));
        assert_eq!(PlayerAction::Sail.object(), None);
        assert!(PlayerAction::Sail.is_sail());
        assert!(!PlayerAction::LoadToBoat(ObjectId(4)).is_sail());
    }

    #[test]
    fn test_action_equality() {
        let a1 = PlayerAction::LoadToBoat(ObjectId(5));
        let a2 = PlayerAction::LoadToBoat(ObjectId(5));
        let a3 = PlayerAction::UnloadFromBoat(ObjectId(5));

        assert_eq!(a1, a2);
        assert_ne!(a1, a3);
    }

    #[test]
    fn test_display() {
        assert_eq!(PlayerAction::LoadToBoat(ObjectId(1)).to_string(), "load Object(1)");
        assert_eq!(PlayerAction::UnloadFromBoat(ObjectId(2)).to_string(), "unload Object(2)");
        assert_eq!(PlayerAction::Sail.to_string(), "sail");
    }

    #[test]
    fn test_action_serialization() {
        let actions = vec![
            PlayerAction::LoadToBoat(ObjectId(1)),
            PlayerAction::UnloadFromBoat(ObjectId(2)),
            PlayerAction::Sail,
        ];
        let json = serde_json::to_string(&actions).unwrap();
        let deserialized: Vec<PlayerAction> = serde_json::from_str(&json).unwrap();

        assert_eq!(actions, deserialized);
    }
}
