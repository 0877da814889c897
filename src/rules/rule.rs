//! Rule trait and ordered rule sets.
//!
//! A rule inspects a proposed transition (`from`, `action`, `to`) and either
//! accepts it or explains why it is not allowed. Rules never mutate anything,
//! so they can be evaluated for any candidate without committing it.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::core::{GameState, LevelDefinition, PlayerAction};

/// A transition rejected by a rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct RuleViolation {
    message: String,
}

impl RuleViolation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Human-readable explanation.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A single validation rule.
///
/// ## Implementation Notes
///
/// - Must be pure: same inputs, same answer
/// - `to` is the candidate produced by the transition function; it may be
///   nonsensical when the action itself is invalid, so structural rules
///   should inspect `from` and `action`
/// - A rule whose verdict depends on `crossings()` must say so through
///   `reads_crossings`. Searches on levels without a crossing limit otherwise
///   merge states that differ only in their counter.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Validate a proposed transition. Returns `None` if it is allowed.
    fn validate(
        &self,
        level: &LevelDefinition,
        from: &GameState,
        action: PlayerAction,
        to: &GameState,
    ) -> Option<RuleViolation>;

    /// Whether the verdict can change with the crossing counter alone, other
    /// than through the level's own crossing limit.
    fn reads_crossings(&self) -> bool {
        false
    }
}

/// Ordered list of rules.
///
/// Any violation blocks a move; the order only decides which message the
/// player sees. Cloning is cheap (rules are shared).
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Vec<Arc<dyn Rule>>,
}

impl RuleSet {
    /// Create an empty rule set (every transition is allowed).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    #[must_use]
    pub fn with_rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.push(rule);
        self
    }

    /// Append a rule in place.
    pub fn push<R: Rule + 'static>(&mut self, rule: R) {
        self.rules.push(Arc::new(rule));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check if any rule depends on the crossing counter.
    #[must_use]
    pub fn reads_crossings(&self) -> bool {
        self.rules.iter().any(|rule| rule.reads_crossings())
    }

    /// Evaluate rules in order and return the first violation.
    #[must_use]
    pub fn first_violation(
        &self,
        level: &LevelDefinition,
        from: &GameState,
        action: PlayerAction,
        to: &GameState,
    ) -> Option<RuleViolation> {
        self.rules
            .iter()
            .find_map(|rule| rule.validate(level, from, action, to))
    }

    /// Check if no rule objects to a transition.
    #[must_use]
    pub fn allows(
        &self,
        level: &LevelDefinition,
        from: &GameState,
        action: PlayerAction,
        to: &GameState,
    ) -> bool {
        self.first_violation(level, from, action, to).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LevelBuilder, ObjectType};

    #[derive(Debug)]
    struct Forbid(&'static str);

    impl Rule for Forbid {
        fn validate(
            &self,
            _level: &LevelDefinition,
            _from: &GameState,
            _action: PlayerAction,
            _to: &GameState,
        ) -> Option<RuleViolation> {
            Some(RuleViolation::new(self.0))
        }
    }

    #[derive(Debug)]
    struct NoSail;

    impl Rule for NoSail {
        fn validate(
            &self,
            _level: &LevelDefinition,
            _from: &GameState,
            action: PlayerAction,
            _to: &GameState,
        ) -> Option<RuleViolation> {
            action.is_sail().then(|| RuleViolation::new("no sailing"))
        }
    }

    fn fixture() -> (LevelDefinition, GameState) {
        let mut builder = LevelBuilder::new(1, "Fixture");
        builder.add_object(ObjectType::STUDENT, "A");
        let level = builder.build().unwrap();
        let state = GameState::initial(&level);
        (level, state)
    }

    #[test]
    fn test_empty_rule_set_allows_everything() {
        let (level, state) = fixture();
        let rules = RuleSet::new();

        assert!(rules.is_empty());
        assert!(rules.allows(&level, &state, PlayerAction::Sail, &state));
    }

    #[test]
    fn test_first_violation_wins() {
        let (level, state) = fixture();
        let rules = RuleSet::new()
            .with_rule(Forbid("first"))
            .with_rule(Forbid("second"));

        let violation = rules.first_violation(&level, &state, PlayerAction::Sail, &state);
        assert_eq!(violation, Some(RuleViolation::new("first")));
    }

    #[test]
    fn test_order_changes_message_not_outcome() {
        let (level, state) = fixture();
        let ab = RuleSet::new().with_rule(NoSail).with_rule(Forbid("always"));
        let ba = RuleSet::new().with_rule(Forbid("always")).with_rule(NoSail);

        let v1 = ab.first_violation(&level, &state, PlayerAction::Sail, &state).unwrap();
        let v2 = ba.first_violation(&level, &state, PlayerAction::Sail, &state).unwrap();

        assert_eq!(v1.message(), "no sailing");
        assert_eq!(v2.message(), "always");
    }

    #[test]
    fn test_clone_shares_rules() {
        let mut rules = RuleSet::new();
        rules.push(NoSail);
        let cloned = rules.clone();

        assert_eq!(cloned.len(), 1);
    }

    #[derive(Debug)]
    struct LateUnload;

    impl Rule for LateUnload {
        fn validate(
            &self,
            _level: &LevelDefinition,
            _from: &GameState,
            _action: PlayerAction,
            _to: &GameState,
        ) -> Option<RuleViolation> {
            None
        }

        fn reads_crossings(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_reads_crossings() {
        assert!(!RuleSet::new().reads_crossings());
        assert!(!RuleSet::new().with_rule(NoSail).reads_crossings());
        assert!(RuleSet::new().with_rule(NoSail).with_rule(LateUnload).reads_crossings());
    }

    #[test]
    fn test_violation_display() {
        let violation = RuleViolation::new("Boat capacity is 2.");
        assert_eq!(violation.to_string(), "Boat capacity is 2.");
        assert_eq!(violation.message(), "Boat capacity is 2.");
    }
}
