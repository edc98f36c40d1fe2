//! Running win counter for the crawler game.

use tracing::{info, warn};

use crate::core::PlayerId;
use crate::driver::MatchOutcome;
use crate::error::Result;
use crate::scores::HighScoreStore;

/// Counts human wins ("butterflies helped") and persists after each one.
#[derive(Debug)]
pub struct CrawlerTally<H: HighScoreStore> {
    human: PlayerId,
    count: i64,
    store: H,
}

impl<H: HighScoreStore> CrawlerTally<H> {
    /// Start from the count persisted in `store`.
    pub fn new(human: PlayerId, store: H) -> Self {
        let count = store.load();
        Self { human, count, store }
    }

    /// Human wins so far.
    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn store(&self) -> &H {
        &self.store
    }

    /// Count the outcome. Returns `true` if the human won.
    ///
    /// The in-memory count advances even if saving fails.
    pub fn record(&mut self, outcome: &MatchOutcome) -> bool {
        if !outcome.is_winner(self.human) {
            return false;
        }
        self.count += outcome.score_delta;
        if let Err(e) = self.store.save(self.count) {
            warn!(error = %e, count = self.count, "failed to save tally");
        }
        info!(count = self.count, "human win tallied");
        true
    }

    /// Zero the tally and persist it.
    pub fn reset(&mut self) -> Result<()> {
        self.count = self.store.baseline();
        self.store.reset()
    }
}
