//! Core engine types: seats, moves, state, RNG, configuration.
//!
//! This module contains the fundamental building blocks shared by every
//! take-away variant. Variants configure these via `GameConfig` rather than
//! modifying the core.

pub mod player;
pub mod rng;
pub mod config;
pub mod moves;
pub mod state;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, TerminalPolicy};
pub use moves::{Move, MoveList, MoveRecord};
pub use state::GameState;
