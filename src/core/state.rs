//! Game state: where every object is and how many crossings were made.
//!
//! ## GameState
//!
//! - Boat side (which bank the boat is docked at)
//! - Left bank, right bank, and boat cargo
//! - Crossing counter
//!
//! Uses `im` persistent ordered sets for O(1) cloning during search. Ordered
//! sets iterate in ID order, so equal states always hash identically no
//! matter how their objects were moved there.
//!
//! Every action produces a new `GameState` value. `crossings` is part of the
//! value, so two states that differ only in their counter are not equal.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::level::LevelDefinition;
use super::object::ObjectId;
use super::side::BankSide;

/// Where an object currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    Bank(BankSide),
    Boat,
}

/// Snapshot of a puzzle in progress.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameState {
    boat_side: BankSide,
    left: OrdSet<ObjectId>,
    right: OrdSet<ObjectId>,
    boat_cargo: OrdSet<ObjectId>,
    crossings: u32,
}

impl GameState {
    /// Create the starting state of a level.
    #[must_use]
    pub fn initial(level: &LevelDefinition) -> Self {
        Self {
            boat_side: level.initial_boat_side(),
            left: level.initial_left().clone(),
            right: level.initial_right().clone(),
            boat_cargo: OrdSet::new(),
            crossings: 0,
        }
    }

    /// Bank the boat is docked at.
    #[must_use]
    pub fn boat_side(&self) -> BankSide {
        self.boat_side
    }

    #[must_use]
    pub fn left(&self) -> &OrdSet<ObjectId> {
        &self.left
    }

    #[must_use]
    pub fn right(&self) -> &OrdSet<ObjectId> {
        &self.right
    }

    #[must_use]
    pub fn boat_cargo(&self) -> &OrdSet<ObjectId> {
        &self.boat_cargo
    }

    /// Number of sails made so far.
    #[must_use]
    pub fn crossings(&self) -> u32 {
        self.crossings
    }

    /// Objects on a bank.
    #[must_use]
    pub fn bank(&self, side: BankSide) -> &OrdSet<ObjectId> {
        match side {
            BankSide::Left => &self.left,
            BankSide::Right => &self.right,
        }
    }

    /// Objects on the bank the boat is docked at.
    #[must_use]
    pub fn docked_bank(&self) -> &OrdSet<ObjectId> {
        self.bank(self.boat_side)
    }

    /// Find an object. Returns `None` if it is nowhere.
    #[must_use]
    pub fn location_of(&self, id: ObjectId) -> Option<Location> {
        if self.boat_cargo.contains(&id) {
            Some(Location::Boat)
        } else if self.left.contains(&id) {
            Some(Location::Bank(BankSide::Left))
        } else if self.right.contains(&id) {
            Some(Location::Bank(BankSide::Right))
        } else {
            None
        }
    }

    /// Win: every goal object is on the right bank.
    ///
    /// Objects still in the boat do not count, even when it is docked right.
    #[must_use]
    pub fn is_win(&self, goal_on_right: &OrdSet<ObjectId>) -> bool {
        goal_on_right.iter().all(|id| self.right.contains(id))
    }

    /// Check the location invariant: the banks and the cargo are pairwise
    /// disjoint and together hold exactly the level's roster.
    #[must_use]
    pub fn is_consistent(&self, level: &LevelDefinition) -> bool {
        let total = self.left.len() + self.right.len() + self.boat_cargo.len();
        let all_ids = level.all_ids();

        total == all_ids.len()
            && all_ids
                .iter()
                .all(|id| self.location_of(*id).is_some())
    }

    // === Mutation (transition function only) ===

    pub(crate) fn bank_mut(&mut self, side: BankSide) -> &mut OrdSet<ObjectId> {
        match side {
            BankSide::Left => &mut self.left,
            BankSide::Right => &mut self.right,
        }
    }

    pub(crate) fn boat_cargo_mut(&mut self) -> &mut OrdSet<ObjectId> {
        &mut self.boat_cargo
    }

    pub(crate) fn sail(&mut self) {
        self.boat_side = self.boat_side.opposite();
        self.crossings += 1;
    }

    /// Same placement, crossing counter reset to zero.
    #[must_use]
    pub(crate) fn placement(&self) -> GameState {
        GameState {
            crossings: 0,
            ..self.clone()
        }
    }
}
