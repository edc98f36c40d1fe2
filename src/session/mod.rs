//! Scorekeeping around matches.
//!
//! Sessions consume `MatchOutcome` values after the driver reports game
//! over; they never drive a match themselves.

mod crawler_tally;
mod race_table;

pub use crawler_tally::CrawlerTally;
pub use race_table::{RaceTable, Settlement, LOAN_AMOUNT, LOAN_THRESHOLD, STARTING_WALLET};
