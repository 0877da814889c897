//! Level definitions.
//!
//! A `LevelDefinition` describes one puzzle: its object roster, where every
//! object starts, which objects must end up on the right bank, the boat
//! capacity, and an optional crossing limit.
//!
//! Levels are authored outside the engine, either in code through
//! `LevelBuilder` or as serialized data. Either way they are checked once with
//! `LevelDefinition::validate` and never change afterwards.
//!
//! ## Usage
//!
//! ```
//! use river_crossing::core::{LevelBuilder, ObjectType};
//!
//! let mut builder = LevelBuilder::new(1, "First Crossing")
//!     .intro("Welcome to the river crossing puzzle.", "Tap the boat to sail.")
//!     .crossings_limit(5);
//! builder.add_objects(ObjectType::STUDENT, 2, "Schoolgirl");
//!
//! let level = builder.build().unwrap();
//! assert_eq!(level.objects().len(), 2);
//! assert_eq!(level.goal_on_right().len(), 2);
//! ```

use im::OrdSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::object::{GameObject, ObjectId, ObjectType};
use super::side::BankSide;

/// Default boat capacity of the shipped game.
pub const DEFAULT_BOAT_CAPACITY: usize = 2;

/// Reason a level definition cannot be played.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LevelError {
    /// Boat capacity is zero.
    #[error("boat capacity must be at least 1")]
    ZeroCapacity,

    /// Two roster entries share an ID.
    #[error("{0} appears more than once in the roster")]
    DuplicateObject(ObjectId),

    /// The initial left bank references an object not in the roster.
    #[error("initial left bank has unknown {0}")]
    UnknownOnLeft(ObjectId),

    /// The initial right bank references an object not in the roster.
    #[error("initial right bank has unknown {0}")]
    UnknownOnRight(ObjectId),

    /// An object starts on both banks.
    #[error("{0} is placed on both banks at start")]
    PlacedOnBothBanks(ObjectId),

    /// An object starts on neither bank.
    #[error("{0} is not placed on any bank at start")]
    Unplaced(ObjectId),

    /// The goal references an object not in the roster.
    #[error("goal has unknown {0}")]
    UnknownGoal(ObjectId),
}

/// Two-line introduction shown before a level starts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelIntro {
    pub line1: String,
    pub line2: String,
}

impl LevelIntro {
    /// Create a new intro.
    pub fn new(line1: impl Into<String>, line2: impl Into<String>) -> Self {
        Self {
            line1: line1.into(),
            line2: line2.into(),
        }
    }
}

/// Immutable description of one puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDefinition {
    index: u32,
    title: String,
    #[serde(default)]
    intro: LevelIntro,
    objects: Vec<GameObject>,
    #[serde(default)]
    initial_boat_side: BankSide,
    #[serde(default)]
    initial_left: OrdSet<ObjectId>,
    #[serde(default)]
    initial_right: OrdSet<ObjectId>,
    goal_on_right: OrdSet<ObjectId>,
    boat_capacity: usize,
    #[serde(default)]
    crossings_limit: Option<u32>,
}

impl LevelDefinition {
    /// Check the level invariants.
    ///
    /// A level is playable when the capacity is at least 1, roster IDs are
    /// unique, the two initial banks partition the roster exactly, and the
    /// goal only names roster objects.
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.boat_capacity == 0 {
            return Err(LevelError::ZeroCapacity);
        }

        let mut all_ids = OrdSet::new();
        for object in &self.objects {
            if all_ids.insert(object.id).is_some() {
                return Err(LevelError::DuplicateObject(object.id));
            }
        }

        if let Some(id) = self.initial_left.iter().copied().find(|id| !all_ids.contains(id)) {
            return Err(LevelError::UnknownOnLeft(id));
        }
        if let Some(id) = self.initial_right.iter().copied().find(|id| !all_ids.contains(id)) {
            return Err(LevelError::UnknownOnRight(id));
        }
        if let Some(id) = self
            .initial_left
            .iter()
            .copied()
            .find(|id| self.initial_right.contains(id))
        {
            return Err(LevelError::PlacedOnBothBanks(id));
        }
        if let Some(id) = all_ids
            .iter()
            .copied()
            .find(|id| !self.initial_left.contains(id) && !self.initial_right.contains(id))
        {
            return Err(LevelError::Unplaced(id));
        }
        if let Some(id) = self.goal_on_right.iter().copied().find(|id| !all_ids.contains(id)) {
            return Err(LevelError::UnknownGoal(id));
        }

        Ok(())
    }

    /// Level number (1-based in the shipped game).
    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn intro(&self) -> &LevelIntro {
        &self.intro
    }

    /// The object roster, in authoring order.
    #[must_use]
    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    /// Look up a roster entry.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Category of an object, or `None` if the ID is unknown.
    #[must_use]
    pub fn object_type(&self, id: ObjectId) -> Option<ObjectType> {
        self.object(id).map(|o| o.object_type)
    }

    /// Check if an ID is in the roster.
    #[must_use]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.object(id).is_some()
    }

    /// Every roster ID.
    #[must_use]
    pub fn all_ids(&self) -> OrdSet<ObjectId> {
        self.objects.iter().map(|o| o.id).collect()
    }

    #[must_use]
    pub fn initial_boat_side(&self) -> BankSide {
        self.initial_boat_side
    }

    #[must_use]
    pub fn initial_left(&self) -> &OrdSet<ObjectId> {
        &self.initial_left
    }

    #[must_use]
    pub fn initial_right(&self) -> &OrdSet<ObjectId> {
        &self.initial_right
    }

    /// Objects that must be on the right bank to win.
    #[must_use]
    pub fn goal_on_right(&self) -> &OrdSet<ObjectId> {
        &self.goal_on_right
    }

    #[must_use]
    pub fn boat_capacity(&self) -> usize {
        self.boat_capacity
    }

    /// Maximum number of sails, or `None` for no limit.
    #[must_use]
    pub fn crossings_limit(&self) -> Option<u32> {
        self.crossings_limit
    }

    /// Check if a crossing count is within the limit.
    #[must_use]
    pub fn within_crossings_limit(&self, crossings: u32) -> bool {
        self.crossings_limit.map_or(true, |limit| crossings <= limit)
    }
}

/// Builder for authoring a `LevelDefinition` in code.
///
/// Objects receive sequential IDs starting at 0. Unless overridden, objects
/// start on the left bank, the boat starts on the left, the goal is every
/// object, the capacity is 2, and there is no crossing limit.
#[derive(Clone, Debug)]
pub struct LevelBuilder {
    index: u32,
    title: String,
    intro: LevelIntro,
    objects: Vec<GameObject>,
    initial_boat_side: BankSide,
    initial_left: OrdSet<ObjectId>,
    initial_right: OrdSet<ObjectId>,
    goal_on_right: Option<OrdSet<ObjectId>>,
    boat_capacity: usize,
    crossings_limit: Option<u32>,
    next_id: u32,
}

impl LevelBuilder {
    pub fn new(index: u32, title: impl Into<String>) -> Self {
        Self {
            index,
            title: title.into(),
            intro: LevelIntro::default(),
            objects: Vec::new(),
            initial_boat_side: BankSide::Left,
            initial_left: OrdSet::new(),
            initial_right: OrdSet::new(),
            goal_on_right: None,
            boat_capacity: DEFAULT_BOAT_CAPACITY,
            crossings_limit: None,
            next_id: 0,
        }
    }

    #[must_use]
    pub fn intro(mut self, line1: impl Into<String>, line2: impl Into<String>) -> Self {
        self.intro = LevelIntro::new(line1, line2);
        self
    }

    #[must_use]
    pub fn boat_capacity(mut self, capacity: usize) -> Self {
        self.boat_capacity = capacity;
        self
    }

    #[must_use]
    pub fn crossings_limit(mut self, limit: u32) -> Self {
        self.crossings_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn boat_side(mut self, side: BankSide) -> Self {
        self.initial_boat_side = side;
        self
    }

    /// Restrict the goal to the given objects.
    #[must_use]
    pub fn goal(mut self, ids: impl IntoIterator<Item = ObjectId>) -> Self {
        self.goal_on_right = Some(ids.into_iter().collect());
        self
    }

    /// Add an object on the left bank.
    pub fn add_object(&mut self, object_type: ObjectType, name: impl Into<String>) -> ObjectId {
        self.add_object_on(BankSide::Left, object_type, name)
    }

    /// Add an object on the given bank.
    pub fn add_object_on(
        &mut self,
        side: BankSide,
        object_type: ObjectType,
        name: impl Into<String>,
    ) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;

        self.objects.push(GameObject::new(id, object_type, name));
        match side {
            BankSide::Left => self.initial_left.insert(id),
            BankSide::Right => self.initial_right.insert(id),
        };
        id
    }

    /// Add `count` objects of one category on the left bank, named
    /// `"{prefix} #1"`, `"{prefix} #2"`, ...
    pub fn add_objects(&mut self, object_type: ObjectType, count: usize, prefix: &str) -> Vec<ObjectId> {
        (1..=count)
            .map(|n| self.add_object(object_type, format!("{} #{}", prefix, n)))
            .collect()
    }

    /// Finish the level, validating it.
    pub fn build(self) -> Result<LevelDefinition, LevelError> {
        let goal_on_right = self
            .goal_on_right
            .unwrap_or_else(|| self.objects.iter().map(|o| o.id).collect());

        let level = LevelDefinition {
            index: self.index,
            title: self.title,
            intro: self.intro,
            objects: self.objects,
            initial_boat_side: self.initial_boat_side,
            initial_left: self.initial_left,
            initial_right: self.initial_right,
            goal_on_right,
            boat_capacity: self.boat_capacity,
            crossings_limit: self.crossings_limit,
        };
        level.validate()?;
        Ok(level)
    }
}
