//! Match driver: turn alternation, terminal detection, result reporting.
//!
//! ## Overview
//!
//! A `Match` moves through exactly two kinds of phase:
//!
//! - `AwaitingMove(seat)`: a human seat waits for `submit_human_move`, an
//!   agent seat is advanced by `step_agent` / `run_agents`
//! - `Over(winner)`: terminal, reported once to the `MatchObserver`
//!
//! Pausing, animation delays and input polling belong to the UI around the
//! driver, not to the driver itself.
//!
//! ## Usage
//!
//! ```rust
//! use rust_takeaway::core::{Move, PlayerId, PlayerMap};
//! use rust_takeaway::driver::{Match, MatchPhase, NullObserver};
//! use rust_takeaway::games::race::RaceBuilder;
//! use rust_takeaway::player::{AgentPlayer, Player};
//! use rust_takeaway::search::NegamaxSearch;
//!
//! let rules = RaceBuilder::new().build().unwrap();
//! let players = PlayerMap::new(|seat| {
//!     if seat == PlayerId::FIRST {
//!         Player::Human
//!     } else {
//!         Player::Agent(AgentPlayer::perfect(12).unwrap())
//!     }
//! });
//! let mut game = Match::new(rules, players, NegamaxSearch::default(), NullObserver);
//!
//! game.submit_human_move(Move::new(1)).unwrap();
//! let phase = game.run_agents().unwrap();
//! assert_eq!(phase, MatchPhase::AwaitingMove(PlayerId::FIRST));
//! ```

pub mod match_driver;
pub mod observer;
pub mod outcome;

pub use match_driver::Match;
pub use observer::{MatchEvent, MatchObserver, NullObserver, RecordingObserver};
pub use outcome::{MatchOutcome, MatchPhase};
