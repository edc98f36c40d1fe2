//! High score persistence for the single-player sessions.

mod store;

pub use store::{
    record_if_higher, HighScoreStore, JsonHighScoreFile, MemoryHighScore, PlainHighScoreFile,
};
