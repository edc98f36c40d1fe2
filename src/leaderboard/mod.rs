//! Game catalog and per-game leaderboard.
//!
//! ```
//! use rust_takeaway::leaderboard::{Leaderboard, SubmitOutcome};
//!
//! let mut board = Leaderboard::new();
//! board.create_game("Race to 21").unwrap();
//! assert_eq!(
//!     board.submit_score("Race to 21", "ada", 900).unwrap(),
//!     SubmitOutcome::NewHighScore
//! );
//! assert_eq!(
//!     board.submit_score("Race to 21", "bob", 600).unwrap(),
//!     SubmitOutcome::Recorded
//! );
//! assert_eq!(board.get("Race to 21").unwrap().high_score, 900);
//! ```

mod catalog;

pub use catalog::{GameEntry, Leaderboard, SubmitOutcome};
