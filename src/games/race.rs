//! Race to 21.
//!
//! Players alternately add 1, 2 or 3 to a running count that starts at 0.
//! Whoever brings the count to exactly 21 wins. Modelled as a pool of 21
//! with `accumulated()` as the displayed count.

use crate::core::{GameConfig, PlayerId, TerminalPolicy};
use crate::error::Result;
use crate::rules::SubtractionRules;

/// Default target count.
pub const TARGET: u32 = 21;

/// Default largest addition per turn.
pub const MAX_ADD: u8 = 3;

/// Builder for race-to-a-target rules.
pub struct RaceBuilder {
    target: u32,
    max_add: u8,
    policy: TerminalPolicy,
    first_player: PlayerId,
}

impl Default for RaceBuilder {
    fn default() -> Self {
        Self {
            target: TARGET,
            max_add: MAX_ADD,
            policy: TerminalPolicy::LastMoverWins,
            first_player: PlayerId::FIRST,
        }
    }
}

impl RaceBuilder {
    /// Race to 21 adding 1..=3, last to move wins, first seat opens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count that ends the race.
    pub fn target(mut self, target: u32) -> Self {
        self.target = target;
        self
    }

    /// Largest amount one turn may add.
    pub fn max_add(mut self, max_add: u8) -> Self {
        self.max_add = max_add;
        self
    }

    /// Whether reaching the target wins or loses.
    pub fn policy(mut self, policy: TerminalPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Seat that makes the opening move.
    pub fn first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Build the rules. The opening position is `rules.initial_state()`.
    pub fn build(self) -> Result<SubtractionRules> {
        SubtractionRules::new(
            GameConfig::new(self.max_add, self.target)
                .with_name(format!("race to {}", self.target))
                .with_policy(self.policy)
                .with_first_player(self.first_player),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Move;
    use crate::rules::RulesEngine;

    #[test]
    fn test_default_race() {
        let rules = RaceBuilder::new().build().unwrap();
        let state = rules.initial_state();
        assert_eq!(state.accumulated(), 0);
        assert_eq!(state.remaining(), 21);
        assert_eq!(rules.legal_moves(&state).len(), 3);
        assert_eq!(rules.config().name, "race to 21");
    }

    #[test]
    fn test_count_reaches_target() {
        let rules = RaceBuilder::new().target(5).build().unwrap();
        let mut state = rules.initial_state();

        rules.apply(&mut state, Move::new(3)).unwrap();
        assert_eq!(state.accumulated(), 3);
        assert_eq!(rules.legal_moves(&state).as_slice(), &[Move(1), Move(2)]);

        rules.apply(&mut state, Move::new(2)).unwrap();
        assert!(rules.is_over(&state));
        assert_eq!(rules.winner_of(&state), Some(PlayerId::SECOND));
    }

    #[test]
    fn test_invalid_race_rejected() {
        assert!(RaceBuilder::new().target(0).build().is_err());
        assert!(RaceBuilder::new().max_add(0).build().is_err());
    }
}
