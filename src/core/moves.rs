//! Move representation: a quantity taken from the shared pool.
//!
//! A move is the number of units the mover consumes this turn (leaves
//! eaten, points added toward the target). Legal moves always form the
//! ascending run `1..=min(K, remaining)`, so a `SmallVec` sized for the
//! common `K <= 3` case never touches the heap.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// A single move: how many units to take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move(pub u8);

impl Move {
    /// Create a move taking `amount` units.
    #[must_use]
    pub const fn new(amount: u8) -> Self {
        Self(amount)
    }

    /// Number of units this move consumes.
    #[must_use]
    pub const fn amount(self) -> u32 {
        self.0 as u32
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered list of legal moves.
pub type MoveList = SmallVec<[Move; 4]>;

/// A recorded move with metadata for history tracking.
///
/// Used for:
/// - Match history shown by the UI
/// - Replays and debugging
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The seat that made the move.
    pub player: PlayerId,

    /// The move made.
    pub mv: Move,

    /// Pool size right after the move.
    pub remaining_after: u32,

    /// 1-based ply number of this move.
    pub ply: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, remaining_after: u32, ply: u32) -> Self {
        Self {
            player,
            mv,
            remaining_after,
            ply,
        }
    }
}
