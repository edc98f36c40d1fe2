//! Fixed-depth adversarial search.
//!
//! ## Overview
//!
//! Plain negamax over the `RulesEngine` seam:
//!
//! - **Depth-bounded**: leaves are terminal positions (`±win_score`) or
//!   positions where the depth ran out (0)
//! - **Apply/undo**: one state is mutated and restored, never cloned
//! - **Deterministic**: ties go to the smallest legal move
//! - **Optional alpha-beta**: same move, fewer nodes
//!
//! Search depth must be at least the longest remaining line (the pool
//! size) for the chosen move to be provably optimal. Requested depths are
//! clamped to the pool size and to `MAX_SEARCH_DEPTH`.
//!
//! ## Usage
//!
//! ```rust
//! use rust_takeaway::core::{GameConfig, Move};
//! use rust_takeaway::rules::SubtractionRules;
//! use rust_takeaway::search::{MoveSearch, NegamaxSearch};
//!
//! let rules = SubtractionRules::new(GameConfig::new(2, 12)).unwrap();
//! let mut state = rules.initial_state();
//! let mut search = NegamaxSearch::default();
//!
//! let result = search.choose_move(&rules, &mut state, 12).unwrap();
//! assert_eq!(result.best_move, Move::new(1));
//! ```

pub mod config;
pub mod negamax;
pub mod stats;

pub use config::SearchConfig;
pub use negamax::{Forecast, MoveSearch, NegamaxSearch, SearchResult, MAX_SEARCH_DEPTH};
pub use stats::SearchStats;
