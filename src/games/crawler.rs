//! Leaf crawler.
//!
//! A branch holds 12 leaves. Players alternately eat one or two; the one
//! who eats the last leaf becomes the butterfly.

use crate::core::{GameConfig, PlayerId, TerminalPolicy};
use crate::error::Result;
use crate::player::AgentConfig;
use crate::rules::SubtractionRules;

/// Leaves on the branch at the start.
pub const LEAVES: u32 = 12;

/// Most leaves eaten in one turn.
pub const MAX_BITE: u8 = 2;

/// Search depth of the robot opponent.
pub const ROBOT_DEPTH: u32 = 5;

/// The robot opponent's agent settings.
pub fn robot_agent() -> AgentConfig {
    AgentConfig::new(ROBOT_DEPTH)
}

/// Builder for crawler rules.
pub struct CrawlerBuilder {
    leaves: u32,
    max_bite: u8,
    policy: TerminalPolicy,
    first_player: PlayerId,
}

impl Default for CrawlerBuilder {
    fn default() -> Self {
        Self {
            leaves: LEAVES,
            max_bite: MAX_BITE,
            policy: TerminalPolicy::LastMoverWins,
            first_player: PlayerId::FIRST,
        }
    }
}

impl CrawlerBuilder {
    /// Twelve leaves, bites of 1..=2, last leaf wins, first seat opens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leaves on the branch at the start.
    pub fn leaves(mut self, leaves: u32) -> Self {
        self.leaves = leaves;
        self
    }

    /// Most leaves one turn may eat.
    pub fn max_bite(mut self, max_bite: u8) -> Self {
        self.max_bite = max_bite;
        self
    }

    /// Misère variant: the last leaf is poisonous.
    pub fn last_leaf_loses(mut self) -> Self {
        self.policy = TerminalPolicy::LastMoverLoses;
        self
    }

    /// Seat that takes the first bite.
    pub fn first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Build the rules. The opening position is `rules.initial_state()`.
    pub fn build(self) -> Result<SubtractionRules> {
        SubtractionRules::new(
            GameConfig::new(self.max_bite, self.leaves)
                .with_name("crawler")
                .with_policy(self.policy)
                .with_first_player(self.first_player),
        )
    }
}
