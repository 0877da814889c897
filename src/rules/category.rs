//! "Cannot be alone with" rules.
//!
//! A single rule covers the whole family: a *vulnerable* category may not
//! share an unattended bank with a *hazard* category unless a *protector* is
//! also there. A bank is unattended when the boat is not docked at it in the
//! candidate state. Neither the docked bank nor the boat cargo is checked.
//!
//! ```
//! use river_crossing::core::ObjectType;
//! use river_crossing::rules::CategorySafetyRule;
//!
//! // Shipped pairing: schoolgirl + gardener need a janitor around.
//! let rule = CategorySafetyRule::student_gardener();
//! assert_eq!(rule.protector(), ObjectType::JANITOR);
//!
//! // Game-defined pairing with a custom message.
//! let goats = CategorySafetyRule::new(ObjectType::new(10), ObjectType::new(11), ObjectType::new(12))
//!     .with_message("The goat can't be left with the wolf.");
//! assert_eq!(goats.message(), "The goat can't be left with the wolf.");
//! ```

use std::borrow::Cow;

use crate::core::{BankSide, GameState, LevelDefinition, ObjectType, PlayerAction};

use super::rule::{Rule, RuleViolation};

/// Rejects transitions that leave `vulnerable` with `hazard` and without
/// `protector` on a bank the boat is not docked at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySafetyRule {
    vulnerable: ObjectType,
    hazard: ObjectType,
    protector: ObjectType,
    message: Cow<'static, str>,
}

impl CategorySafetyRule {
    /// Create a rule with a generated message.
    #[must_use]
    pub fn new(vulnerable: ObjectType, hazard: ObjectType, protector: ObjectType) -> Self {
        Self {
            vulnerable,
            hazard,
            protector,
            message: Cow::Owned(format!(
                "A {} can't be alone with a {}.",
                vulnerable.to_string().to_lowercase(),
                hazard.to_string().to_lowercase()
            )),
        }
    }

    /// Replace the violation message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Schoolgirl cannot be alone with a gardener unless a janitor is present.
    #[must_use]
    pub fn student_gardener() -> Self {
        Self::new(ObjectType::STUDENT, ObjectType::GARDENER, ObjectType::JANITOR)
            .with_message("A schoolgirl can't be alone with a gardener.")
    }

    /// Schoolgirl cannot be alone with a janitor unless a gardener is present.
    #[must_use]
    pub fn student_janitor() -> Self {
        Self::new(ObjectType::STUDENT, ObjectType::JANITOR, ObjectType::GARDENER)
            .with_message("A schoolgirl can't be alone with a janitor.")
    }

    #[must_use]
    pub fn vulnerable(&self) -> ObjectType {
        self.vulnerable
    }

    #[must_use]
    pub fn hazard(&self) -> ObjectType {
        self.hazard
    }

    #[must_use]
    pub fn protector(&self) -> ObjectType {
        self.protector
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check a single bank of a state.
    #[must_use]
    pub fn is_bank_unsafe(&self, level: &LevelDefinition, state: &GameState, side: BankSide) -> bool {
        let mut has_vulnerable = false;
        let mut has_hazard = false;

        for id in state.bank(side).iter() {
            match level.object_type(*id) {
                Some(t) if t == self.protector => return false,
                Some(t) => {
                    has_vulnerable |= t == self.vulnerable;
                    has_hazard |= t == self.hazard;
                }
                None => {}
            }
        }

        has_vulnerable && has_hazard
    }
}

impl Rule for CategorySafetyRule {
    fn validate(
        &self,
        level: &LevelDefinition,
        _from: &GameState,
        _action: PlayerAction,
        to: &GameState,
    ) -> Option<RuleViolation> {
        BankSide::ALL
            .into_iter()
            .filter(|&side| side != to.boat_side())
            .any(|side| self.is_bank_unsafe(level, to, side))
            .then(|| RuleViolation::new(self.message.clone()))
    }
}
