//! # rust-takeaway
//!
//! A turn-based take-away game engine with a fixed-depth negamax agent.
//!
//! Two seats alternately remove 1..=K units from a shared pool. Whether the
//! player who empties the pool wins or loses is a per-variant policy.
//!
//! ## Design Principles
//!
//! 1. **Apply/Undo Search**: Negamax borrows one mutable `GameState` and
//!    restores it after every explored move. No per-node allocation.
//!
//! 2. **Driver Owns State**: The `Match` is the single owner of the live
//!    position. Agents borrow it for one decision; the UI only reads it.
//!
//! 3. **Configuration Over Convention**: Variants are `GameConfig` values
//!    (`max_take`, `initial`, terminal policy), not separate types.
//!
//! ## Modules
//!
//! - `core`: Seats, moves, state, RNG, configuration
//! - `rules`: `RulesEngine` trait and the subtraction-game rules
//! - `search`: Fixed-depth negamax with optional alpha-beta
//! - `player`: Human and agent seats, agent noise policy
//! - `driver`: Match state machine and observers
//! - `games`: Race-to-21 and crawler presets
//! - `scores`: High score persistence
//! - `session`: Betting table and win tally around matches
//! - `leaderboard`: Game catalog with per-game records

pub mod core;
pub mod driver;
pub mod error;
pub mod games;
pub mod leaderboard;
pub mod player;
pub mod rules;
pub mod scores;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameRngState, GameState, Move, MoveList, MoveRecord, PlayerId,
    PlayerMap, TerminalPolicy,
};

pub use crate::error::{EngineError, Result};

pub use crate::rules::{RulesEngine, SubtractionRules};

pub use crate::search::{
    Forecast, MoveSearch, NegamaxSearch, SearchConfig, SearchResult, SearchStats,
};

pub use crate::player::{AgentConfig, AgentPlayer, Decision, Player};

pub use crate::driver::{
    Match, MatchEvent, MatchObserver, MatchOutcome, MatchPhase, NullObserver, RecordingObserver,
};

pub use crate::games::{crawler::CrawlerBuilder, race::RaceBuilder, Difficulty};

pub use crate::scores::{HighScoreStore, JsonHighScoreFile, MemoryHighScore, PlainHighScoreFile};

pub use crate::session::{CrawlerTally, RaceTable, Settlement};

pub use crate::leaderboard::{GameEntry, Leaderboard, SubmitOutcome};
