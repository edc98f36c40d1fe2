//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics accumulated across searches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Root searches performed.
    pub searches: u32,

    /// Nodes visited, root children included.
    pub nodes: u64,

    /// Leaves scored (terminal or depth-exhausted).
    pub leaves: u64,

    /// Deepest ply reached below a root.
    pub max_ply: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.searches, 0);
        assert_eq!(stats.nodes, 0);
    }

    #[test]
    fn test_nodes_per_second() {
        let mut stats = SearchStats::new();
        assert_eq!(stats.nodes_per_second(), 0.0);

        stats.nodes = 1000;
        stats.time_us = 1_000_000;
        assert_eq!(stats.nodes_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.searches = 3;
        stats.leaves = 50;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }
}
