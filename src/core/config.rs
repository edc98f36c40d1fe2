//! Game configuration.
//!
//! A take-away variant is fully described by:
//! - `max_take`: the per-turn maximum K
//! - `initial`: the starting pool (or the target for race variants)
//! - `terminal_policy`: who wins when the pool runs out
//! - `first_player`: the seat that opens
//!
//! Configs can be built in code with the `with_*` methods or loaded from
//! JSON. Both paths go through `validate`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::PlayerId;
use crate::error::{EngineError, Result};

/// Who wins once the pool reaches zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalPolicy {
    /// The player whose move emptied the pool wins ("race to the mark").
    #[default]
    LastMoverWins,
    /// The player whose move emptied the pool loses (misère play).
    LastMoverLoses,
}

/// Configuration for one take-away variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Display name of the variant.
    pub name: String,

    /// Most units a player may take in one turn (K).
    pub max_take: u8,

    /// Starting pool size.
    ///
    /// Full-depth search recurses once per unit left, and deeper searches
    /// are capped at `search::MAX_SEARCH_DEPTH` plies, so pools beyond that size
    /// are played with a depth-limited agent.
    pub initial: u32,

    /// Terminal scoring convention.
    pub terminal_policy: TerminalPolicy,

    /// Seat that moves first.
    pub first_player: PlayerId,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            name: "take-away".to_string(),
            max_take: 3,
            initial: 21,
            terminal_policy: TerminalPolicy::LastMoverWins,
            first_player: PlayerId::FIRST,
        }
    }
}

impl GameConfig {
    /// Create a config with the given K and pool size.
    pub fn new(max_take: u8, initial: u32) -> Self {
        Self {
            max_take,
            initial,
            ..Self::default()
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the terminal policy.
    #[must_use]
    pub fn with_policy(mut self, policy: TerminalPolicy) -> Self {
        self.terminal_policy = policy;
        self
    }

    /// Set the opening seat.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Check the config describes a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.max_take == 0 {
            return Err(EngineError::invalid_config("max_take must be at least 1"));
        }
        if self.initial == 0 {
            return Err(EngineError::invalid_config("initial pool must be at least 1"));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            operation: format!("read config {path:?}"),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
