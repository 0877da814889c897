//! Ready-made rule sets for the shipped difficulty tiers.
//!
//! Every preset starts from the structural rules (`RuleSet::base`) and adds
//! zero, one, or both of the schoolgirl pairing rules.

use serde::{Deserialize, Serialize};

use super::base::{
    BoatCapacityRule, BoatMustHavePassengerRule, CrossingsLimitRule, LoadUnloadValidityRule,
};
use super::category::CategorySafetyRule;
use super::rule::RuleSet;

/// Difficulty tier of a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Structural rules only.
    Tutorial,
    /// Adds the schoolgirl/gardener pairing.
    Easy,
    /// Adds the schoolgirl/janitor pairing.
    Medium,
    /// Both pairings.
    Hard,
}

impl Difficulty {
    /// Build the rule set for this tier.
    #[must_use]
    pub fn rules(self) -> RuleSet {
        match self {
            Difficulty::Tutorial => RuleSet::base(),
            Difficulty::Easy => RuleSet::with_category_rules(true, false),
            Difficulty::Medium => RuleSet::with_category_rules(false, true),
            Difficulty::Hard => RuleSet::with_category_rules(true, true),
        }
    }
}

impl RuleSet {
    /// Structural rules every level uses: load/unload validity, capacity,
    /// sail precondition, crossing limit.
    #[must_use]
    pub fn base() -> Self {
        RuleSet::new()
            .with_rule(LoadUnloadValidityRule)
            .with_rule(BoatCapacityRule)
            .with_rule(BoatMustHavePassengerRule)
            .with_rule(CrossingsLimitRule)
    }

    /// Base rules plus the selected pairing rules, gardener pairing first.
    #[must_use]
    pub fn with_category_rules(student_gardener: bool, student_janitor: bool) -> Self {
        let mut rules = Self::base();
        if student_gardener {
            rules.push(CategorySafetyRule::student_gardener());
        }
        if student_janitor {
            rules.push(CategorySafetyRule::student_janitor());
        }
        rules
    }
}
