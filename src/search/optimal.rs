//! Minimum-crossings solvers.
//!
//! Loading and unloading are free; each sail costs one crossing. With two edge
//! weights a plain BFS gives wrong answers, so the default solver runs a 0-1
//! BFS: a deque where free moves go to the front and sails to the back, which
//! keeps the deque sorted by cost. `DijkstraSolver` computes the same value
//! with a binary heap and serves as a cross-check.
//!
//! Because `crossings` is part of the state, every path to a state has the
//! same cost, and a sail never changes what is on the banks. A win is
//! therefore first reached through an unload at the current minimum cost,
//! which is why the 0-1 BFS may stop on the first improvement of a win state.
//!
//! Costs are recorded per `visit_key`. When neither the level nor any rule
//! cares about the counter, that key drops it, which turns the search into a
//! shortest path over placements and keeps it finite on unsolvable levels.
//! Malformed levels have no solution and are not searched.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::time::Instant;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{GameState, LevelDefinition};
use crate::engine::successors::{successors, Successor};
use crate::rules::RuleSet;

use super::stats::SearchStats;
use super::visit::visit_key;

/// Anything that can compute the minimum number of sails to win a level.
pub trait OptimalCrossingsSolver {
    /// Minimum crossings to win, or `None` if the level cannot be won under
    /// the rules and crossing limit.
    fn minimal_crossings(&self, level: &LevelDefinition, rules: &RuleSet) -> Option<u32>;
}

/// Result of an optimal search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimalSolution {
    /// Minimum crossings, or `None` when no winning sequence exists.
    pub crossings: Option<u32>,
    pub stats: SearchStats,
}

/// 0-1 BFS over the state graph.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroOneBfsSolver;

impl ZeroOneBfsSolver {
    #[must_use]
    pub fn solve(&self, level: &LevelDefinition, rules: &RuleSet) -> OptimalSolution {
        if let Some(unsearched) = reject_malformed(level) {
            return unsearched;
        }
        let started = Instant::now();
        let goal = level.goal_on_right();
        let start = GameState::initial(level);
        let mut stats = SearchStats::new();

        let mut best_cost: FxHashMap<GameState, u32> = FxHashMap::default();
        best_cost.insert(visit_key(level, rules, &start), 0);

        let mut crossings = None;
        if start.is_win(goal) {
            crossings = Some(0);
        } else {
            let mut deque = VecDeque::from([start]);

            'search: while let Some(state) = deque.pop_front() {
                let Some(&current_cost) = best_cost.get(&visit_key(level, rules, &state)) else {
                    continue;
                };
                // Superseded by a cheaper arrival at the same placement
                if current_cost < state.crossings() {
                    continue;
                }
                stats.states_expanded += 1;

                for Successor { action, state: next } in successors(level, rules, &state) {
                    let edge_cost = action.crossing_cost();
                    let cost = current_cost + edge_cost;

                    let key = visit_key(level, rules, &next);
                    if best_cost.get(&key).is_some_and(|&known| known <= cost) {
                        continue;
                    }
                    best_cost.insert(key, cost);

                    let won = next.is_win(goal);
                    if edge_cost == 0 {
                        deque.push_front(next);
                    } else {
                        deque.push_back(next);
                    }

                    if won {
                        crossings = Some(cost);
                        break 'search;
                    }
                }
            }
        }

        stats.states_discovered = best_cost.len();
        stats.time_us = started.elapsed().as_micros() as u64;
        debug!(
            level = level.index(),
            crossings = ?crossings,
            explored = stats.states_discovered,
            elapsed_us = stats.time_us,
            expansions_per_sec = stats.expansions_per_second(),
            "optimal search finished"
        );

        OptimalSolution { crossings, stats }
    }
}

impl OptimalCrossingsSolver for ZeroOneBfsSolver {
    fn minimal_crossings(&self, level: &LevelDefinition, rules: &RuleSet) -> Option<u32> {
        self.solve(level, rules).crossings
    }
}

/// Dijkstra over the state graph with a binary heap.
///
/// Slower than `ZeroOneBfsSolver` but finalizes each state on pop, so it is
/// easy to trust. Returns identical costs.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl DijkstraSolver {
    #[must_use]
    pub fn solve(&self, level: &LevelDefinition, rules: &RuleSet) -> OptimalSolution {
        if let Some(unsearched) = reject_malformed(level) {
            return unsearched;
        }
        let started = Instant::now();
        let goal = level.goal_on_right();
        let start = GameState::initial(level);
        let mut stats = SearchStats::new();

        let mut best_cost: FxHashMap<GameState, u32> = FxHashMap::default();
        best_cost.insert(visit_key(level, rules, &start), 0);

        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0u32, start)));

        let mut crossings = None;
        while let Some(Reverse((cost, state))) = heap.pop() {
            if best_cost.get(&visit_key(level, rules, &state)).is_some_and(|&known| known < cost) {
                continue;
            }
            if state.is_win(goal) {
                crossings = Some(cost);
                break;
            }
            stats.states_expanded += 1;

            for Successor { action, state: next } in successors(level, rules, &state) {
                let next_cost = cost + action.crossing_cost();
                let key = visit_key(level, rules, &next);
                if best_cost.get(&key).is_some_and(|&known| known <= next_cost) {
                    continue;
                }
                best_cost.insert(key, next_cost);
                heap.push(Reverse((next_cost, next)));
            }
        }

        stats.states_discovered = best_cost.len();
        stats.time_us = started.elapsed().as_micros() as u64;
        debug!(
            level = level.index(),
            crossings = ?crossings,
            explored = stats.states_discovered,
            elapsed_us = stats.time_us,
            expansions_per_sec = stats.expansions_per_second(),
            "dijkstra search finished"
        );

        OptimalSolution { crossings, stats }
    }
}

impl OptimalCrossingsSolver for DijkstraSolver {
    fn minimal_crossings(&self, level: &LevelDefinition, rules: &RuleSet) -> Option<u32> {
        self.solve(level, rules).crossings
    }
}

/// Empty solution for a level that fails validation.
fn reject_malformed(level: &LevelDefinition) -> Option<OptimalSolution> {
    let error = level.validate().err()?;
    warn!(level = level.index(), %error, "malformed level not solved");
    Some(OptimalSolution {
        crossings: None,
        stats: SearchStats::new(),
    })
}

/// Minimum crossings to win, using the default solver.
#[must_use]
pub fn minimal_crossings(level: &LevelDefinition, rules: &RuleSet) -> Option<u32> {
    ZeroOneBfsSolver.minimal_crossings(level, rules)
}
