//! Rules engine trait and the subtraction-game implementation.
//!
//! Variants implement `RulesEngine` to define their rules:
//! - What moves are legal
//! - How moves modify (and un-modify) state
//! - Who won, and how a finished position scores

use tracing::trace;

use crate::core::{GameConfig, GameState, Move, MoveList, PlayerId, TerminalPolicy};
use crate::error::{EngineError, Result};

/// Rules engine trait.
///
/// The search and the match driver call these methods; they never
/// interpret variant-specific concepts directly.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty iff the state is over
/// - `apply`: Must reject illegal moves without touching the state
/// - `undo`: Exact inverse of the most recent `apply` (LIFO)
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Legal moves for the player to move, in ascending order.
    fn legal_moves(&self, state: &GameState) -> MoveList;

    /// Apply a move for the player to move.
    ///
    /// Fails with `IllegalMove` and leaves `state` unchanged if the move is
    /// not in `legal_moves(state)`.
    fn apply(&self, state: &mut GameState, mv: Move) -> Result<()>;

    /// Revert the most recent `apply(state, mv)`.
    fn undo(&self, state: &mut GameState, mv: Move);

    /// Check if the game is over.
    fn is_over(&self, state: &GameState) -> bool;

    /// Winner of a finished game, `None` while play continues.
    fn winner_of(&self, state: &GameState) -> Option<PlayerId>;

    // === Convenience Methods ===

    /// Check a single move against `legal_moves`.
    fn is_legal(&self, state: &GameState, mv: Move) -> bool {
        self.legal_moves(state).contains(&mv)
    }

    /// Score of a leaf from the perspective of the player to move.
    ///
    /// `+win_score` if the player to move has won, `-win_score` if they
    /// have lost, `0` for a position that is not over (depth exhausted).
    fn terminal_score(&self, state: &GameState, win_score: i32) -> i32 {
        match self.winner_of(state) {
            Some(winner) if winner == state.turn() => win_score,
            Some(_) => -win_score,
            None => 0,
        }
    }
}

/// Rules for a one-pile subtraction game: take `1..=K` per turn.
///
/// The race-to-a-target variant is the same game seen from the other side:
/// the distance to the target is the pool, and reaching the target exactly
/// is emptying it.
#[derive(Clone, Debug)]
pub struct SubtractionRules {
    config: GameConfig,
}

impl SubtractionRules {
    /// Create rules from a validated config.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The starting position for this variant.
    #[must_use]
    pub fn initial_state(&self) -> GameState {
        GameState::new(self.config.initial, self.config.first_player)
    }

    /// Per-turn maximum K.
    #[must_use]
    pub fn max_take(&self) -> u8 {
        self.config.max_take
    }

    /// Terminal scoring convention.
    #[must_use]
    pub fn policy(&self) -> TerminalPolicy {
        self.config.terminal_policy
    }
}

impl RulesEngine for SubtractionRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_moves(&self, state: &GameState) -> MoveList {
        let upper = state.remaining().min(u32::from(self.config.max_take)) as u8;
        (1..=upper).map(Move::new).collect()
    }

    fn is_legal(&self, state: &GameState, mv: Move) -> bool {
        mv.0 >= 1 && mv.0 <= self.config.max_take && mv.amount() <= state.remaining()
    }

    fn apply(&self, state: &mut GameState, mv: Move) -> Result<()> {
        if !self.is_legal(state, mv) {
            return Err(EngineError::IllegalMove {
                mv,
                remaining: state.remaining(),
                max_take: self.config.max_take,
            });
        }
        state.take(mv.amount());
        trace!(mv = mv.0, remaining = state.remaining(), "applied move");
        Ok(())
    }

    fn undo(&self, state: &mut GameState, mv: Move) {
        debug_assert!(mv.0 >= 1 && mv.0 <= self.config.max_take);
        state.give_back(mv.amount());
    }

    fn is_over(&self, state: &GameState) -> bool {
        state.remaining() == 0
    }

    fn winner_of(&self, state: &GameState) -> Option<PlayerId> {
        if !self.is_over(state) {
            return None;
        }
        let last_mover = state.turn().opponent();
        Some(match self.config.terminal_policy {
            TerminalPolicy::LastMoverWins => last_mover,
            TerminalPolicy::LastMoverLoses => state.turn(),
        })
    }
}
