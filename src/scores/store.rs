//! High score persistence.
//!
//! Loading never fails from the caller's point of view: a missing,
//! unreadable or corrupt score falls back to the store's baseline and the
//! problem is logged. Saving reports errors so callers can decide whether
//! to surface them; the sessions in this crate only log them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{EngineError, Result};

/// Storage for a single game's high score.
pub trait HighScoreStore {
    /// Current high score, or the baseline if none can be read.
    fn load(&self) -> i64;

    /// Persist a new high score.
    fn save(&mut self, score: i64) -> Result<()>;

    /// Score used when nothing has been stored.
    fn baseline(&self) -> i64;

    /// Reset to the baseline.
    fn reset(&mut self) -> Result<()> {
        let baseline = self.baseline();
        self.save(baseline)
    }
}

/// Save `score` if it beats the stored high score.
///
/// Returns `true` when a new high score was recorded. Save failures are
/// logged and reported as `false`.
pub fn record_if_higher(store: &mut dyn HighScoreStore, score: i64) -> bool {
    if score <= store.load() {
        return false;
    }
    match store.save(score) {
        Ok(()) => {
            info!(score, "new high score");
            true
        }
        Err(e) => {
            warn!(error = %e, score, "failed to save high score");
            false
        }
    }
}

#[derive(Serialize, Deserialize)]
struct JsonScore {
    highscore: i64,
}

/// `{"highscore": N}` file store.
#[derive(Clone, Debug)]
pub struct JsonHighScoreFile {
    path: PathBuf,
    baseline: i64,
}

impl JsonHighScoreFile {
    pub fn new(path: impl Into<PathBuf>, baseline: i64) -> Self {
        Self {
            path: path.into(),
            baseline,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonHighScoreFile {
    fn load(&self) -> i64 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = ?self.path, error = %e, "unreadable high score file");
                }
                return self.baseline;
            }
        };
        match serde_json::from_str::<JsonScore>(&text) {
            Ok(score) => score.highscore,
            Err(e) => {
                warn!(path = ?self.path, error = %e, "corrupt high score file");
                self.baseline
            }
        }
    }

    fn save(&mut self, score: i64) -> Result<()> {
        let json = serde_json::to_string(&JsonScore { highscore: score })?;
        fs::write(&self.path, json).map_err(|source| EngineError::Io {
            operation: format!("write high score {:?}", self.path),
            source,
        })
    }

    fn baseline(&self) -> i64 {
        self.baseline
    }
}

/// Plain-text integer file store.
#[derive(Clone, Debug)]
pub struct PlainHighScoreFile {
    path: PathBuf,
    baseline: i64,
}

impl PlainHighScoreFile {
    /// Store with a baseline of 0.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            baseline: 0,
        }
    }

    pub fn with_baseline(mut self, baseline: i64) -> Self {
        self.baseline = baseline;
        self
    }
}

impl HighScoreStore for PlainHighScoreFile {
    fn load(&self) -> i64 {
        match fs::read_to_string(&self.path) {
            Ok(text) => text.trim().parse().unwrap_or_else(|e| {
                warn!(path = ?self.path, error = %e, "corrupt high score file");
                self.baseline
            }),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = ?self.path, error = %e, "unreadable high score file");
                }
                self.baseline
            }
        }
    }

    fn save(&mut self, score: i64) -> Result<()> {
        fs::write(&self.path, score.to_string()).map_err(|source| EngineError::Io {
            operation: format!("write high score {:?}", self.path),
            source,
        })
    }

    fn baseline(&self) -> i64 {
        self.baseline
    }
}

/// In-process store.
#[derive(Clone, Debug, Default)]
pub struct MemoryHighScore {
    score: Option<i64>,
    baseline: i64,
}

impl MemoryHighScore {
    pub fn new(baseline: i64) -> Self {
        Self {
            score: None,
            baseline,
        }
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load(&self) -> i64 {
        self.score.unwrap_or(self.baseline)
    }

    fn save(&mut self, score: i64) -> Result<()> {
        self.score = Some(score);
        Ok(())
    }

    fn baseline(&self) -> i64 {
        self.baseline
    }
}
