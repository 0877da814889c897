//! Deduplication key for search.

use crate::core::{GameState, LevelDefinition};
use crate::rules::RuleSet;

/// Key under which a state is deduplicated during search.
///
/// The full state, crossings included, is the key whenever the counter can
/// matter: the level has a crossing limit (which also keeps the graph finite)
/// or some rule reads the counter. Otherwise only the placement is kept, since
/// states differing only in crossings then have identical moves and an
/// unlimited counter would make unsolvable levels search forever.
///
/// A rule that reads crossings on a level without a limit gives an unbounded
/// graph; such a search ends only when it finds a win.
#[must_use]
pub fn visit_key(level: &LevelDefinition, rules: &RuleSet, state: &GameState) -> GameState {
    if level.crossings_limit().is_some() || rules.reads_crossings() {
        state.clone()
    } else {
        state.placement()
    }
}
