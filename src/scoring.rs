//! End-of-level rewards.
//!
//! A win scores one point. Coins reward efficiency relative to the minimum
//! number of crossings the level needs.

use serde::{Deserialize, Serialize};

/// Coins for matching or beating the optimum.
pub const COINS_OPTIMAL: u32 = 3;
/// Coins for finishing one crossing over the optimum.
pub const COINS_NEAR_OPTIMAL: u32 = 2;
/// Coins for any other win.
pub const COINS_COMPLETED: u32 = 1;

/// Outcome of one attempt at a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelResult {
    pub did_win: bool,
    pub score: u32,
    pub coins: u32,
    pub player_crossings: u32,

    /// `None` when the optimum was not computed or the level is unsolvable.
    pub optimal_crossings: Option<u32>,
}

impl LevelResult {
    #[must_use]
    pub fn new(did_win: bool, player_crossings: u32, optimal_crossings: Option<u32>) -> Self {
        Self {
            did_win,
            score: u32::from(did_win),
            coins: coins_for(did_win, player_crossings, optimal_crossings),
            player_crossings,
            optimal_crossings,
        }
    }

    /// The player matched or beat the optimum.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.did_win && self.coins == COINS_OPTIMAL
    }
}

fn coins_for(did_win: bool, player: u32, optimal: Option<u32>) -> u32 {
    if !did_win {
        return 0;
    }
    match optimal {
        None | Some(0) => COINS_COMPLETED,
        Some(best) if player <= best => COINS_OPTIMAL,
        Some(best) if player == best + 1 => COINS_NEAR_OPTIMAL,
        Some(_) => COINS_COMPLETED,
    }
}
