//! Move validation.
//!
//! Every proposed transition is checked by an ordered `RuleSet`:
//! - Structural rules (`base`): object placement, capacity, sailing, limits
//! - Pairing rules (`category`): who may be left alone with whom
//! - Presets (`presets`): rule sets for each difficulty tier
//!
//! The engine and both solvers call into `RuleSet::first_violation` and never
//! encode puzzle constraints themselves.

pub mod base;
pub mod category;
pub mod presets;
pub mod rule;

pub use base::{
    BoatCapacityRule, BoatMustHavePassengerRule, CrossingsLimitRule, LoadUnloadValidityRule,
};
pub use category::CategorySafetyRule;
pub use presets::Difficulty;
pub use rule::{Rule, RuleSet, RuleViolation};
