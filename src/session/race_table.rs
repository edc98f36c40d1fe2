//! Betting table for the race game.
//!
//! The human stakes part of a wallet on each match. A win pays twice the
//! bet, or two and a half times once the player is on a streak of two or
//! more. The best wallet ever held is the table's high score.

use tracing::{debug, info};

use crate::core::PlayerId;
use crate::driver::MatchOutcome;
use crate::error::{EngineError, Result};
use crate::scores::{record_if_higher, HighScoreStore};

/// Wallet at the start of a session.
pub const STARTING_WALLET: i64 = 500;

/// Amount credited by a loan.
pub const LOAN_AMOUNT: i64 = 500;

/// Loans are only granted below this balance.
pub const LOAN_THRESHOLD: i64 = 100;

/// Result of settling one bet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub won: bool,
    /// Credited to the wallet (0 on a loss).
    pub payout: i64,
    /// Streak after settling.
    pub streak: u32,
    pub new_high_score: bool,
}

/// Wallet, bet and streak for one human seat.
#[derive(Debug)]
pub struct RaceTable<H: HighScoreStore> {
    human: PlayerId,
    wallet: i64,
    current_bet: i64,
    streak: u32,
    high_score: i64,
    store: H,
}

impl<H: HighScoreStore> RaceTable<H> {
    /// Open a table for `human` with the starting wallet.
    pub fn new(human: PlayerId, store: H) -> Self {
        let high_score = store.load();
        Self {
            human,
            wallet: STARTING_WALLET,
            current_bet: 0,
            streak: 0,
            high_score,
            store,
        }
    }

    pub fn wallet(&self) -> i64 {
        self.wallet
    }

    /// Amount on the table, 0 between rounds.
    pub fn current_bet(&self) -> i64 {
        self.current_bet
    }

    /// Consecutive wins before the next settlement.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn high_score(&self) -> i64 {
        self.high_score
    }

    pub fn human(&self) -> PlayerId {
        self.human
    }

    pub fn store(&self) -> &H {
        &self.store
    }

    /// Move `amount` from the wallet onto the table.
    pub fn place_bet(&mut self, amount: i64) -> Result<()> {
        if self.current_bet > 0 {
            return Err(EngineError::invalid_state("a bet is already on the table"));
        }
        if amount <= 0 {
            return Err(EngineError::invalid_state("bets must be positive"));
        }
        if amount > self.wallet {
            return Err(EngineError::InsufficientFunds {
                requested: amount,
                available: self.wallet,
            });
        }
        self.wallet -= amount;
        self.current_bet = amount;
        debug!(bet = amount, wallet = self.wallet, "bet placed");
        Ok(())
    }

    /// Bet the whole wallet. Returns the amount staked.
    pub fn all_in(&mut self) -> Result<i64> {
        let amount = self.wallet;
        if amount <= 0 {
            return Err(EngineError::InsufficientFunds {
                requested: amount,
                available: self.wallet,
            });
        }
        self.place_bet(amount)?;
        Ok(amount)
    }

    /// Pay out or forfeit the current bet.
    pub fn settle(&mut self, outcome: &MatchOutcome) -> Result<Settlement> {
        if self.current_bet == 0 {
            return Err(EngineError::invalid_state("no bet to settle"));
        }
        let bet = std::mem::take(&mut self.current_bet);

        if !outcome.is_winner(self.human) {
            self.streak = 0;
            debug!(bet, wallet = self.wallet, "bet lost");
            return Ok(Settlement {
                won: false,
                payout: 0,
                streak: 0,
                new_high_score: false,
            });
        }

        // Bonus applies to the streak held going into this win.
        let payout = if self.streak >= 2 { bet * 5 / 2 } else { bet * 2 };
        self.wallet += payout;
        self.streak += 1;

        let new_high_score = self.wallet > self.high_score;
        if new_high_score {
            self.high_score = self.wallet;
            record_if_higher(&mut self.store, self.wallet);
        }
        info!(bet, payout, wallet = self.wallet, streak = self.streak, "bet won");

        Ok(Settlement {
            won: true,
            payout,
            streak: self.streak,
            new_high_score,
        })
    }

    /// Borrow `LOAN_AMOUNT` if the wallet is below `LOAN_THRESHOLD`.
    pub fn take_loan(&mut self) -> bool {
        if self.wallet >= LOAN_THRESHOLD {
            return false;
        }
        self.wallet += LOAN_AMOUNT;
        info!(wallet = self.wallet, "loan taken");
        true
    }

    /// Nothing left to bet and nothing on the table.
    pub fn is_bankrupt(&self) -> bool {
        self.wallet <= 0 && self.current_bet == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::MemoryHighScore;

    fn table() -> RaceTable<MemoryHighScore> {
        RaceTable::new(PlayerId::FIRST, MemoryHighScore::new(STARTING_WALLET))
    }

    fn human_wins() -> MatchOutcome {
        MatchOutcome::new(PlayerId::FIRST, 8)
    }

    fn agent_wins() -> MatchOutcome {
        MatchOutcome::new(PlayerId::SECOND, 8)
    }

    #[test]
    fn test_place_bet() {
        let mut t = table();
        t.place_bet(100).unwrap();
        assert_eq!(t.wallet(), 400);
        assert_eq!(t.current_bet(), 100);

        assert!(matches!(t.place_bet(50), Err(EngineError::InvalidState { .. })));
    }

    #[test]
    fn test_insufficient_funds() {
        let mut t = table();
        assert!(matches!(
            t.place_bet(501),
            Err(EngineError::InsufficientFunds {
                requested: 501,
                available: 500
            })
        ));
        assert!(t.place_bet(0).is_err());
        assert_eq!(t.wallet(), 500);
    }

    #[test]
    fn test_win_pays_double() {
        let mut t = table();
        t.place_bet(100).unwrap();
        let s = t.settle(&human_wins()).unwrap();

        assert!(s.won);
        assert_eq!(s.payout, 200);
        assert_eq!(t.wallet(), 600);
        assert_eq!(t.streak(), 1);
        assert!(s.new_high_score);
        assert_eq!(t.store().load(), 600);
    }

    #[test]
    fn test_streak_bonus_from_third_win() {
        let mut t = table();
        for _ in 0..2 {
            t.place_bet(10).unwrap();
            assert_eq!(t.settle(&human_wins()).unwrap().payout, 20);
        }

        t.place_bet(25).unwrap();
        let s = t.settle(&human_wins()).unwrap();
        // 25 * 2.5 truncated
        assert_eq!(s.payout, 62);
        assert_eq!(s.streak, 3);
    }

    #[test]
    fn test_loss_resets_streak() {
        let mut t = table();
        t.place_bet(10).unwrap();
        t.settle(&human_wins()).unwrap();

        t.place_bet(50).unwrap();
        let s = t.settle(&agent_wins()).unwrap();
        assert!(!s.won);
        assert_eq!(s.payout, 0);
        assert_eq!(t.streak(), 0);
        assert_eq!(t.wallet(), 460);
        assert_eq!(t.high_score(), 510);
    }

    #[test]
    fn test_settle_without_bet() {
        let mut t = table();
        assert!(t.settle(&human_wins()).is_err());
    }

    #[test]
    fn test_all_in_loss_then_loan() {
        let mut t = table();
        assert!(!t.take_loan());

        assert_eq!(t.all_in().unwrap(), 500);
        assert!(!t.is_bankrupt());
        t.settle(&agent_wins()).unwrap();
        assert!(t.is_bankrupt());
        assert!(t.all_in().is_err());

        assert!(t.take_loan());
        assert_eq!(t.wallet(), LOAN_AMOUNT);
        assert!(!t.is_bankrupt());
    }

    #[test]
    fn test_high_score_only_beaten_by_wallet_above_record() {
        let mut store = MemoryHighScore::new(STARTING_WALLET);
        store.save(2000).unwrap();
        let mut t = RaceTable::new(PlayerId::FIRST, store);

        t.place_bet(500).unwrap();
        let s = t.settle(&human_wins()).unwrap();
        assert!(!s.new_high_score);
        assert_eq!(t.high_score(), 2000);
        assert_eq!(t.store().load(), 2000);
    }
}
