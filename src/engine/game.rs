//! Live-play state machine.
//!
//! `GameEngine` owns one level, one rule set, and the current state. Every
//! action goes through `apply`, which is transactional: the candidate state is
//! computed, checked against the rules and the physical move guard, and
//! committed only if nothing objects.

use im::Vector;
use tracing::{debug, trace};

use crate::core::{GameState, LevelDefinition, LevelError, PlayerAction};
use crate::rules::{RuleSet, RuleViolation};

use super::successors::successors;
use super::transition;

/// Reported when an action is impossible but no rule objected to it.
pub const INVALID_MOVE: &str = "Invalid move.";

/// Rule-gated game session for a single level.
///
/// ## Usage
///
/// ```
/// use river_crossing::core::{LevelBuilder, ObjectType, PlayerAction};
/// use river_crossing::engine::GameEngine;
/// use river_crossing::rules::RuleSet;
///
/// let mut builder = LevelBuilder::new(1, "First Crossing");
/// let ids = builder.add_objects(ObjectType::STUDENT, 2, "Schoolgirl");
/// let level = builder.build().unwrap();
///
/// let mut engine = GameEngine::new(level, RuleSet::base()).unwrap();
///
/// // Sailing an empty boat is rejected and changes nothing
/// assert!(engine.apply(PlayerAction::Sail).is_err());
///
/// engine.apply(PlayerAction::LoadToBoat(ids[0])).unwrap();
/// engine.apply(PlayerAction::LoadToBoat(ids[1])).unwrap();
/// engine.apply(PlayerAction::Sail).unwrap();
/// assert!(!engine.is_win()); // still in the boat
///
/// engine.apply(PlayerAction::UnloadFromBoat(ids[0])).unwrap();
/// engine.apply(PlayerAction::UnloadFromBoat(ids[1])).unwrap();
/// assert!(engine.is_win());
/// assert_eq!(engine.state().crossings(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    level: LevelDefinition,
    rules: RuleSet,
    state: GameState,

    /// Committed actions since the last (re)load.
    history: Vector<PlayerAction>,
}

impl GameEngine {
    /// Start a session. Malformed levels are refused.
    pub fn new(level: LevelDefinition, rules: RuleSet) -> Result<Self, LevelError> {
        level.validate()?;
        debug!(level = level.index(), title = level.title(), rules = rules.len(), "level loaded");

        Ok(Self {
            state: GameState::initial(&level),
            level,
            rules,
            history: Vector::new(),
        })
    }

    #[must_use]
    pub fn level(&self) -> &LevelDefinition {
        &self.level
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Read-only view of the current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Actions committed since the level was (re)loaded, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<PlayerAction> {
        &self.history
    }

    /// Win: every goal object is on the right bank. Cargo never counts.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.state.is_win(self.level.goal_on_right())
    }

    /// Apply an action.
    ///
    /// On a rule violation, or if the action is physically impossible, the
    /// state is left exactly as it was and the reason is returned.
    pub fn apply(&mut self, action: PlayerAction) -> Result<(), RuleViolation> {
        let candidate = match self.evaluate(action) {
            Ok(candidate) => candidate,
            Err(violation) => {
                debug!(%action, reason = %violation, "action rejected");
                return Err(violation);
            }
        };

        debug_assert!(
            candidate.is_consistent(&self.level),
            "object in two locations after {}: {:?}",
            action,
            candidate
        );

        trace!(%action, crossings = candidate.crossings(), "action applied");
        self.state = candidate;
        self.history.push_back(action);
        Ok(())
    }

    /// Check an action without committing it.
    #[must_use]
    pub fn check(&self, action: PlayerAction) -> Option<RuleViolation> {
        self.evaluate(action).err()
    }

    /// The state an action would produce, if it is allowed.
    #[must_use]
    pub fn preview(&self, action: PlayerAction) -> Option<GameState> {
        self.evaluate(action).ok()
    }

    /// Rules first, so their messages win; then the physical guard, so an
    /// incomplete rule set can never commit an inconsistent state.
    fn evaluate(&self, action: PlayerAction) -> Result<GameState, RuleViolation> {
        let candidate = transition::apply(&self.state, action);
        if let Some(violation) = self.rules.first_violation(&self.level, &self.state, action, &candidate) {
            return Err(violation);
        }

        transition::try_apply(&self.level, &self.state, action).ok_or_else(|| RuleViolation::new(INVALID_MOVE))
    }

    /// Every action the rules currently allow.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<PlayerAction> {
        successors(&self.level, &self.rules, &self.state)
            .into_iter()
            .map(|s| s.action)
            .collect()
    }

    /// Restore the level's initial state.
    pub fn reset_level(&mut self) {
        debug!(level = self.level.index(), "level reset");
        self.state = GameState::initial(&self.level);
        self.history.clear();
    }

    /// Switch to another level and rule set.
    ///
    /// A malformed level is refused and the engine keeps its current session.
    pub fn load_level(&mut self, level: LevelDefinition, rules: RuleSet) -> Result<(), LevelError> {
        *self = Self::new(level, rules)?;
        Ok(())
    }
}
