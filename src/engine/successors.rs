//! Successor enumeration shared by live play and every search.
//!
//! `GameEngine::legal_actions`, the solvability checker and the optimal
//! solvers all expand states through `successors`, so they always agree on
//! which moves exist.

use smallvec::SmallVec;

use crate::core::{GameState, LevelDefinition, PlayerAction};
use crate::rules::RuleSet;

use super::transition;

/// A rule-valid move out of a state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Successor {
    pub action: PlayerAction,
    pub state: GameState,
}

/// Actions worth trying from a state, before rules are consulted.
///
/// - `LoadToBoat` for each object on the docked bank, unless the boat is full
/// - `UnloadFromBoat` for each object aboard
/// - `Sail` if the boat is not empty
#[must_use]
pub fn candidate_actions(level: &LevelDefinition, state: &GameState) -> SmallVec<[PlayerAction; 8]> {
    let mut actions = SmallVec::new();
    let cargo = state.boat_cargo();

    if cargo.len() < level.boat_capacity() {
        actions.extend(
            state
                .docked_bank()
                .iter()
                .copied()
                .filter(|id| !cargo.contains(id))
                .map(PlayerAction::LoadToBoat),
        );
    }

    actions.extend(cargo.iter().copied().map(PlayerAction::UnloadFromBoat));

    if !cargo.is_empty() {
        actions.push(PlayerAction::Sail);
    }

    actions
}

/// Every move out of `state` that the rules allow and that stays within the
/// level's crossing limit.
#[must_use]
pub fn successors(level: &LevelDefinition, rules: &RuleSet, state: &GameState) -> SmallVec<[Successor; 8]> {
    candidate_actions(level, state)
        .into_iter()
        .filter_map(|action| {
            let next = transition::try_apply(level, state, action)?;

            if rules.first_violation(level, state, action, &next).is_some() {
                return None;
            }
            if !level.within_crossings_limit(next.crossings()) {
                return None;
            }

            debug_assert!(next.is_consistent(level), "inconsistent successor: {:?}", next);
            Some(Successor { action, state: next })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BankSide, LevelBuilder, ObjectType};
    use crate::rules::Difficulty;

    #[test]
    fn test_initial_candidates_are_loads() {
        let mut builder = LevelBuilder::new(1, "Pair");
        let ids = builder.add_objects(ObjectType::STUDENT, 2, "Schoolgirl");
        builder.add_object_on(BankSide::Right, ObjectType::STUDENT, "Waiting");
        let level = builder.build().unwrap();
        let state = GameState::initial(&level);

        let actions = candidate_actions(&level, &state);

        assert_eq!(
            actions.as_slice(),
            &[PlayerAction::LoadToBoat(ids[0]), PlayerAction::LoadToBoat(ids[1])]
        );
    }

    #[test]
    fn test_full_boat_offers_no_loads() {
        let mut builder = LevelBuilder::new(1, "Full").boat_capacity(1);
        let ids = builder.add_objects(ObjectType::STUDENT, 2, "Schoolgirl");
        let level = builder.build().unwrap();
        let state = transition::apply(&GameState::initial(&level), PlayerAction::LoadToBoat(ids[0]));

        let actions = candidate_actions(&level, &state);

        assert_eq!(
            actions.as_slice(),
            &[PlayerAction::UnloadFromBoat(ids[0]), PlayerAction::Sail]
        );
    }

    #[test]
    fn test_successors_filter_rule_violations() {
        let mut builder = LevelBuilder::new(2, "The Gardener");
        let students = builder.add_objects(ObjectType::STUDENT, 2, "Schoolgirl");
        builder.add_object(ObjectType::GARDENER, "Gardener");
        let level = builder.build().unwrap();
        let rules = Difficulty::Easy.rules();

        let state = transition::apply(&GameState::initial(&level), PlayerAction::LoadToBoat(students[0]));
        let next: Vec<_> = successors(&level, &rules, &state).into_iter().map(|s| s.action).collect();

        // Sailing would leave a schoolgirl alone with the gardener
        assert!(!next.contains(&PlayerAction::Sail));
        assert!(next.contains(&PlayerAction::UnloadFromBoat(students[0])));
    }

    #[test]
    fn test_successors_respect_crossings_limit_without_rule() {
        let mut builder = LevelBuilder::new(1, "Limited").crossings_limit(0);
        let id = builder.add_object(ObjectType::STUDENT, "A");
        let level = builder.build().unwrap();
        let state = transition::apply(&GameState::initial(&level), PlayerAction::LoadToBoat(id));

        // Empty rule set: the limit still applies
        let next: Vec<_> = successors(&level, &RuleSet::new(), &state)
            .into_iter()
            .map(|s| s.action)
            .collect();

        assert_eq!(next, vec![PlayerAction::UnloadFromBoat(id)]);
    }

    #[test]
    fn test_successor_states_match_transition() {
        let mut builder = LevelBuilder::new(1, "Pair");
        builder.add_objects(ObjectType::STUDENT, 2, "Schoolgirl");
        let level = builder.build().unwrap();
        let state = GameState::initial(&level);

        for successor in successors(&level, &RuleSet::base(), &state) {
            assert_eq!(successor.state, transition::apply(&state, successor.action));
        }
    }
}
