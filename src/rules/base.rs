//! Structural rules shared by every level.
//!
//! - `LoadUnloadValidityRule`: loads/unloads must reference a real object in
//!   the right place
//! - `BoatCapacityRule`: cargo never exceeds capacity
//! - `BoatMustHavePassengerRule`: an empty boat cannot sail
//! - `CrossingsLimitRule`: total sails stay within the level's limit

use crate::core::{GameState, LevelDefinition, PlayerAction};

use super::rule::{Rule, RuleViolation};

/// Loads must come from the docked bank; unloads must come from the boat.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoadUnloadValidityRule;

impl Rule for LoadUnloadValidityRule {
    fn validate(
        &self,
        level: &LevelDefinition,
        from: &GameState,
        action: PlayerAction,
        _to: &GameState,
    ) -> Option<RuleViolation> {
        match action {
            PlayerAction::LoadToBoat(id) => {
                if !level.contains(id) {
                    return Some(RuleViolation::new("Unknown object."));
                }
                if from.boat_cargo().contains(&id) {
                    return Some(RuleViolation::new("This object is already in the boat."));
                }
                if !from.docked_bank().contains(&id) {
                    return Some(RuleViolation::new(
                        "You can load only from the bank where the boat is docked.",
                    ));
                }
                None
            }
            PlayerAction::UnloadFromBoat(id) => {
                if !from.boat_cargo().contains(&id) {
                    return Some(RuleViolation::new("You can unload only from the boat."));
                }
                None
            }
            PlayerAction::Sail => None,
        }
    }
}

/// Cargo size after the action must not exceed the boat capacity.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoatCapacityRule;

impl Rule for BoatCapacityRule {
    fn validate(
        &self,
        level: &LevelDefinition,
        _from: &GameState,
        _action: PlayerAction,
        to: &GameState,
    ) -> Option<RuleViolation> {
        (to.boat_cargo().len() > level.boat_capacity())
            .then(|| RuleViolation::new(format!("Boat capacity is {}.", level.boat_capacity())))
    }
}

/// The boat needs at least one passenger before it sails.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoatMustHavePassengerRule;

impl Rule for BoatMustHavePassengerRule {
    fn validate(
        &self,
        _level: &LevelDefinition,
        from: &GameState,
        action: PlayerAction,
        _to: &GameState,
    ) -> Option<RuleViolation> {
        (action.is_sail() && from.boat_cargo().is_empty()).then(|| {
            RuleViolation::new("The boat can't move without at least one passenger.")
        })
    }
}

/// Crossings after the action must not exceed the level's limit, if any.
#[derive(Clone, Copy, Debug, Default)]
pub struct CrossingsLimitRule;

impl Rule for CrossingsLimitRule {
    fn validate(
        &self,
        level: &LevelDefinition,
        _from: &GameState,
        _action: PlayerAction,
        to: &GameState,
    ) -> Option<RuleViolation> {
        (!level.within_crossings_limit(to.crossings()))
            .then(|| RuleViolation::new("Crossings limit exceeded."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BankSide, LevelBuilder, ObjectId, ObjectType};
    use crate::engine::transition;

    struct Fixture {
        level: LevelDefinition,
        left: [ObjectId; 3],
        right: ObjectId,
    }

    fn fixture(limit: Option<u32>) -> Fixture {
        let mut builder = LevelBuilder::new(1, "Rules");
        let left = [
            builder.add_object(ObjectType::STUDENT, "A"),
            builder.add_object(ObjectType::STUDENT, "B"),
            builder.add_object(ObjectType::STUDENT, "C"),
        ];
        let right = builder.add_object_on(BankSide::Right, ObjectType::STUDENT, "D");
        if let Some(limit) = limit {
            builder = builder.crossings_limit(limit);
        }
        Fixture {
            level: builder.build().unwrap(),
            left,
            right,
        }
    }

    fn check<R: Rule>(rule: &R, level: &LevelDefinition, from: &GameState, action: PlayerAction) -> Option<String> {
        let to = transition::apply(from, action);
        rule.validate(level, from, action, &to).map(|v| v.message().to_string())
    }

    #[test]
    fn test_load_from_docked_bank() {
        let f = fixture(None);
        let state = GameState::initial(&f.level);

        assert_eq!(check(&LoadUnloadValidityRule, &f.level, &state, PlayerAction::LoadToBoat(f.left[0])), None);
    }

    #[test]
    fn test_load_unknown_object() {
        let f = fixture(None);
        let state = GameState::initial(&f.level);

        assert_eq!(
            check(&LoadUnloadValidityRule, &f.level, &state, PlayerAction::LoadToBoat(ObjectId(77))),
            Some("Unknown object.".to_string())
        );
    }

    #[test]
    fn test_load_twice() {
        let f = fixture(None);
        let state = GameState::initial(&f.level);
        let loaded = transition::apply(&state, PlayerAction::LoadToBoat(f.left[0]));

        assert_eq!(
            check(&LoadUnloadValidityRule, &f.level, &loaded, PlayerAction::LoadToBoat(f.left[0])),
            Some("This object is already in the boat.".to_string())
        );
    }

    #[test]
    fn test_load_from_far_bank() {
        let f = fixture(None);
        let state = GameState::initial(&f.level);

        assert_eq!(
            check(&LoadUnloadValidityRule, &f.level, &state, PlayerAction::LoadToBoat(f.right)),
            Some("You can load only from the bank where the boat is docked.".to_string())
        );
    }

    #[test]
    fn test_unload_not_in_boat() {
        let f = fixture(None);
        let state = GameState::initial(&f.level);

        assert_eq!(
            check(&LoadUnloadValidityRule, &f.level, &state, PlayerAction::UnloadFromBoat(f.left[0])),
            Some("You can unload only from the boat.".to_string())
        );

        let loaded = transition::apply(&state, PlayerAction::LoadToBoat(f.left[0]));
        assert_eq!(
            check(&LoadUnloadValidityRule, &f.level, &loaded, PlayerAction::UnloadFromBoat(f.left[0])),
            None
        );
    }

    #[test]
    fn test_capacity() {
        let f = fixture(None);
        let mut state = GameState::initial(&f.level);
        state = transition::apply(&state, PlayerAction::LoadToBoat(f.left[0]));

        assert_eq!(check(&BoatCapacityRule, &f.level, &state, PlayerAction::LoadToBoat(f.left[1])), None);

        state = transition::apply(&state, PlayerAction::LoadToBoat(f.left[1]));
        assert_eq!(
            check(&BoatCapacityRule, &f.level, &state, PlayerAction::LoadToBoat(f.left[2])),
            Some("Boat capacity is 2.".to_string())
        );
        // Unloading from a full boat is fine
        assert_eq!(check(&BoatCapacityRule, &f.level, &state, PlayerAction::UnloadFromBoat(f.left[1])), None);
    }

    #[test]
    fn test_empty_boat_cannot_sail() {
        let f = fixture(None);
        let state = GameState::initial(&f.level);

        assert_eq!(
            check(&BoatMustHavePassengerRule, &f.level, &state, PlayerAction::Sail),
            Some("The boat can't move without at least one passenger.".to_string())
        );

        let loaded = transition::apply(&state, PlayerAction::LoadToBoat(f.left[0]));
        assert_eq!(check(&BoatMustHavePassengerRule, &f.level, &loaded, PlayerAction::Sail), None);
    }

    #[test]
    fn test_passenger_rule_ignores_loads() {
        let f = fixture(None);
        let state = GameState::initial(&f.level);
        assert_eq!(
            check(&BoatMustHavePassengerRule, &f.level, &state, PlayerAction::LoadToBoat(f.left[0])),
            None
        );
    }

    #[test]
    fn test_crossings_limit() {
        let f = fixture(Some(1));
        let mut state = GameState::initial(&f.level);
        state = transition::apply(&state, PlayerAction::LoadToBoat(f.left[0]));

        assert_eq!(check(&CrossingsLimitRule, &f.level, &state, PlayerAction::Sail), None);

        state = transition::apply(&state, PlayerAction::Sail);
        assert_eq!(
            check(&CrossingsLimitRule, &f.level, &state, PlayerAction::Sail),
            Some("Crossings limit exceeded.".to_string())
        );
        // Loads and unloads do not add crossings
        assert_eq!(check(&CrossingsLimitRule, &f.level, &state, PlayerAction::UnloadFromBoat(f.left[0])), None);
    }

    #[test]
    fn test_no_limit() {
        let f = fixture(None);
        let mut state = GameState::initial(&f.level);
        state = transition::apply(&state, PlayerAction::LoadToBoat(f.left[0]));
        for _ in 0..50 {
            assert_eq!(check(&CrossingsLimitRule, &f.level, &state, PlayerAction::Sail), None);
            state = transition::apply(&state, PlayerAction::Sail);
        }
    }
}
