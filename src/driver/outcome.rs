//! Match phases and results.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Driver state machine.
///
/// `AwaitingMove(p)` → (one applied move) → `AwaitingMove(p.opponent())`
/// or `Over(winner)`. There are no other states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Waiting for the given seat to move.
    AwaitingMove(PlayerId),
    /// Finished, with the winner.
    Over(PlayerId),
}

impl MatchPhase {
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, MatchPhase::Over(_))
    }
}

/// Result reported to score persistence when a match ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Winning seat.
    pub winner: PlayerId,

    /// Losing seat.
    pub loser: PlayerId,

    /// Moves played.
    pub plies: u32,

    /// Score credit for the winner (one per win).
    pub score_delta: i64,
}

impl MatchOutcome {
    /// Outcome with `winner` taking one point.
    #[must_use]
    pub fn new(winner: PlayerId, plies: u32) -> Self {
        Self {
            winner,
            loser: winner.opponent(),
            plies,
            score_delta: 1,
        }
    }

    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}
