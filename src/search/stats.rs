//! Search statistics for diagnostics and level tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Distinct states discovered (including the start).
    pub states_discovered: usize,

    /// States taken off the frontier and expanded.
    pub states_expanded: usize,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate expansions per second.
    #[must_use]
    pub fn expansions_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.states_expanded as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.states_discovered, 0);
        assert_eq!(stats.states_expanded, 0);
    }

    #[test]
    fn test_stats_expansions_per_second() {
        let mut stats = SearchStats::new();
        stats.states_expanded = 500;
        stats.time_us = 500_000; // half a second

        assert_eq!(stats.expansions_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_zero_time() {
        let mut stats = SearchStats::new();
        stats.states_expanded = 10;
        assert_eq!(stats.expansions_per_second(), 0.0);
    }
}
