//! Player abstraction: who supplies the next move.
//!
//! - `Player::Human`: the move arrives from outside (the UI) through the
//!   match driver's `submit_human_move`
//! - `Player::Agent`: the move comes from a search, optionally perturbed by
//!   a noise policy that models an easier difficulty
//!
//! The driver matches on the variant, so every dispatch is exhaustive.

pub mod agent;

pub use agent::{AgentConfig, AgentPlayer, Decision};

/// A seat's move source.
#[derive(Clone, Debug)]
pub enum Player {
    /// Moves are supplied externally.
    Human,
    /// Moves are produced by search.
    Agent(AgentPlayer),
}

impl Player {
    /// Check if this seat waits for external input.
    #[must_use]
    pub fn is_human(&self) -> bool {
        matches!(self, Player::Human)
    }

    /// Get the agent, if this seat is one.
    pub fn as_agent(&self) -> Option<&AgentPlayer> {
        match self {
            Player::Agent(agent) => Some(agent),
            Player::Human => None,
        }
    }
}

impl From<AgentPlayer> for Player {
    fn from(agent: AgentPlayer) -> Self {
        Player::Agent(agent)
    }
}
