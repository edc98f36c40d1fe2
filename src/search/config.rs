//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Negamax search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Default search depth in plies.
    /// Must be at least the game's longest line for provably optimal play.
    pub depth: u32,

    /// Magnitude of a decided position's score.
    pub win_score: i32,

    /// Enable alpha-beta cutoffs.
    /// Chooses the same move as plain negamax, visiting fewer nodes.
    pub alpha_beta: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 12,
            win_score: 100,
            alpha_beta: false,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with custom win score.
    pub fn with_win_score(mut self, score: i32) -> Self {
        self.win_score = score;
        self
    }

    /// Create a new config with alpha-beta toggled.
    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }

    /// Check the config is usable.
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(EngineError::invalid_config("search depth must be at least 1"));
        }
        if self.win_score <= 0 {
            return Err(EngineError::invalid_config("win_score must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 12);
        assert_eq!(config.win_score, 100);
        assert!(!config.alpha_beta);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_depth(5)
            .with_win_score(1000)
            .with_alpha_beta(true);

        assert_eq!(config.depth, 5);
        assert_eq!(config.win_score, 1000);
        assert!(config.alpha_beta);
    }

    #[test]
    fn test_validate() {
        assert!(SearchConfig::default().validate().is_ok());
        assert!(SearchConfig::default().with_win_score(0).validate().is_err());
        assert!(SearchConfig::default().with_win_score(i32::MIN).validate().is_err());
        assert!(SearchConfig::default().with_depth(0).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_depth(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
