//! Solvability checking for level design.
//!
//! Breadth-first search over the implicit graph of `GameState`s, with edges
//! given by rule-valid moves. The search stops as soon as a newly discovered
//! state wins and returns the action path that reached it.
//!
//! BFS finds a path with the fewest *actions*, not the fewest *sails*. The
//! path is a witness that the level can be won; use the optimal solvers for
//! crossing counts.
//!
//! States are deduplicated by `visit_key`, so levels without a crossing limit
//! still have a finite graph and an unsolvable one is reported as such.
//! Malformed levels are reported as unsolvable without searching.

use std::collections::VecDeque;
use std::time::Instant;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{GameState, LevelDefinition, LevelError, PlayerAction};
use crate::engine::successors::{successors, Successor};
use crate::levels::LevelPack;
use crate::rules::RuleSet;

use super::stats::SearchStats;
use super::visit::visit_key;

/// Outcome of checking one level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvabilityReport {
    pub level_index: u32,
    pub title: String,

    /// A win state is reachable under the rules and crossing limit.
    pub is_solvable: bool,

    /// Distinct states visited before the search stopped.
    pub explored_states: usize,

    /// Witness path from the initial state to a win. Empty if the level
    /// starts won or cannot be solved.
    pub solution: Vec<PlayerAction>,

    /// Why the level was not searched, if it failed validation.
    #[serde(default)]
    pub level_error: Option<LevelError>,

    pub stats: SearchStats,
}

/// Predecessor key and the action that left it, by visit key.
type ParentMap = FxHashMap<GameState, (GameState, PlayerAction)>;

/// Check whether a level can be won, returning a witness path.
#[must_use]
pub fn check_one(level: &LevelDefinition, rules: &RuleSet) -> SolvabilityReport {
    if let Err(error) = level.validate() {
        warn!(level = level.index(), %error, "malformed level not checked");
        return SolvabilityReport {
            level_index: level.index(),
            title: level.title().to_string(),
            is_solvable: false,
            explored_states: 0,
            solution: Vec::new(),
            level_error: Some(error),
            stats: SearchStats::new(),
        };
    }

    let started = Instant::now();
    let goal = level.goal_on_right();
    let start = GameState::initial(level);
    let mut stats = SearchStats::new();

    let mut visited: FxHashSet<GameState> = FxHashSet::default();
    visited.insert(visit_key(level, rules, &start));

    let mut solution = None;
    if start.is_win(goal) {
        solution = Some(Vec::new());
    } else {
        let mut parent = ParentMap::default();
        let mut queue = VecDeque::from([start]);

        'search: while let Some(current) = queue.pop_front() {
            stats.states_expanded += 1;
            let current_key = visit_key(level, rules, &current);

            for Successor { action, state: next } in successors(level, rules, &current) {
                let next_key = visit_key(level, rules, &next);
                if !visited.insert(next_key.clone()) {
                    continue;
                }
                parent.insert(next_key.clone(), (current_key.clone(), action));

                if next.is_win(goal) {
                    solution = Some(reconstruct_path(&next_key, &parent));
                    break 'search;
                }
                queue.push_back(next);
            }
        }
    }

    stats.states_discovered = visited.len();
    stats.time_us = started.elapsed().as_micros() as u64;

    let is_solvable = solution.is_some();
    debug!(
        level = level.index(),
        solvable = is_solvable,
        explored = visited.len(),
        elapsed_us = stats.time_us,
        expansions_per_sec = stats.expansions_per_second(),
        "solvability check finished"
    );

    SolvabilityReport {
        level_index: level.index(),
        title: level.title().to_string(),
        is_solvable,
        explored_states: visited.len(),
        solution: solution.unwrap_or_default(),
        level_error: None,
        stats,
    }
}

/// Check a batch of levels, each under its own rules.
#[must_use]
pub fn check_all(packs: &[LevelPack]) -> Vec<SolvabilityReport> {
    packs
        .iter()
        .map(|pack| check_one(&pack.level, &pack.rules))
        .collect()
}

/// Walk parent pointers back from `end` to the start, then reverse.
fn reconstruct_path(end: &GameState, parent: &ParentMap) -> Vec<PlayerAction> {
    let mut actions = Vec::new();
    let mut current = end;

    while let Some((prev, action)) = parent.get(current) {
        actions.push(*action);
        current = prev;
    }

    actions.reverse();
    actions
}
