//! Level pack implementation.

use crate::core::{LevelDefinition, LevelError};
use crate::engine::GameEngine;
use crate::rules::{Difficulty, RuleSet};
use crate::search::{check_one, minimal_crossings, SolvabilityReport};

/// A level and its rule set.
///
/// Levels never carry their own rules; the pack is where the two meet, so the
/// same layout can be shipped at several difficulty tiers.
#[derive(Clone, Debug)]
pub struct LevelPack {
    pub level: LevelDefinition,
    pub rules: RuleSet,
}

impl LevelPack {
    pub fn new(level: LevelDefinition, rules: RuleSet) -> Self {
        Self { level, rules }
    }

    /// Pair a level with a preset rule set.
    pub fn with_difficulty(level: LevelDefinition, difficulty: Difficulty) -> Self {
        Self::new(level, difficulty.rules())
    }

    /// Start a play session. Fails if the level is malformed.
    pub fn engine(&self) -> Result<GameEngine, LevelError> {
        GameEngine::new(self.level.clone(), self.rules.clone())
    }

    /// Run the solvability checker on this pack.
    #[must_use]
    pub fn check(&self) -> SolvabilityReport {
        check_one(&self.level, &self.rules)
    }

    /// Minimum crossings to win, or `None` if unsolvable.
    #[must_use]
    pub fn minimal_crossings(&self) -> Option<u32> {
        minimal_crossings(&self.level, &self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LevelBuilder, ObjectType};

    fn gardener_level() -> LevelDefinition {
        let mut builder = LevelBuilder::new(2, "The Gardener");
        builder.add_objects(ObjectType::STUDENT, 2, "Schoolgirl");
        builder.add_object(ObjectType::GARDENER, "Gardener");
        builder.build().unwrap()
    }

    #[test]
    fn test_with_difficulty_uses_preset() {
        let pack = LevelPack::with_difficulty(gardener_level(), Difficulty::Easy);
        assert_eq!(pack.rules.len(), Difficulty::Easy.rules().len());
    }

    #[test]
    fn test_engine_starts_fresh() {
        let pack = LevelPack::with_difficulty(gardener_level(), Difficulty::Easy);
        let engine = pack.engine().unwrap();

        assert_eq!(engine.level(), &pack.level);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_check_and_optimum_agree_on_solvability() {
        let pack = LevelPack::with_difficulty(gardener_level(), Difficulty::Easy);

        let report = pack.check();
        let optimum = pack.minimal_crossings();

        assert!(report.is_solvable);
        assert!(optimum.is_some());
    }
}
