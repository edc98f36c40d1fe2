//! Game state: one position in the game tree.
//!
//! ## GameState
//!
//! - `remaining`: units left in the shared pool
//! - `initial`: pool size at match start (the target for race variants)
//! - `turn`: seat to move
//! - `ply`: moves made so far
//!
//! Fields are private. Only the rules engine mutates a state, through
//! `apply` and `undo`, so `remaining <= initial` always holds. Deserialized
//! states are checked against the same invariant.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::error::EngineError;

/// A position in a take-away game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    remaining: u32,
    initial: u32,
    turn: PlayerId,
    ply: u32,
}

impl GameState {
    /// Create the starting position with a full pool.
    #[must_use]
    pub fn new(initial: u32, first_player: PlayerId) -> Self {
        Self {
            remaining: initial,
            initial,
            turn: first_player,
            ply: 0,
        }
    }

    /// Create a mid-game position with no moves played yet.
    ///
    /// Useful for analysis and tests. `remaining` is clamped to `initial`.
    #[must_use]
    pub fn at(initial: u32, remaining: u32, turn: PlayerId) -> Self {
        Self {
            remaining: remaining.min(initial),
            initial,
            turn,
            ply: 0,
        }
    }

    /// Units left in the pool.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Pool size at match start.
    #[must_use]
    pub fn initial(&self) -> u32 {
        self.initial
    }

    /// Units consumed so far (the running count in race variants).
    #[must_use]
    pub fn accumulated(&self) -> u32 {
        self.initial - self.remaining
    }

    /// Seat to move.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// Moves made so far.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    // === Engine-only mutation ===

    pub(crate) fn take(&mut self, amount: u32) {
        debug_assert!(amount <= self.remaining);
        self.remaining -= amount;
        self.turn = self.turn.opponent();
        self.ply += 1;
    }

    pub(crate) fn give_back(&mut self, amount: u32) {
        debug_assert!(self.remaining + amount <= self.initial);
        debug_assert!(self.ply > 0);
        self.remaining += amount;
        self.turn = self.turn.opponent();
        self.ply -= 1;
    }
}

/// Unchecked wire form of `GameState`.
#[derive(Deserialize)]
struct RawGameState {
    remaining: u32,
    initial: u32,
    turn: PlayerId,
    #[serde(default)]
    ply: u32,
}

impl TryFrom<RawGameState> for GameState {
    type Error = EngineError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        if raw.remaining > raw.initial {
            return Err(EngineError::invalid_state(format!(
                "remaining {} exceeds initial {}",
                raw.remaining, raw.initial
            )));
        }
        Ok(Self {
            remaining: raw.remaining,
            initial: raw.initial,
            turn: raw.turn,
            ply: raw.ply,
        })
    }
}
