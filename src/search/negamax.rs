//! Fixed-depth negamax search.
//!
//! The tree is explored by mutating one borrowed `GameState` with
//! `apply` and reverting it with `undo` on the way back up. No node is
//! cloned, and the caller's state is identical before and after a search.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{GameState, Move};
use crate::error::{EngineError, Result};
use crate::rules::RulesEngine;

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Bound used for the initial window. Safe to negate.
const INFINITY: i32 = i32::MAX;

/// Deepest search performed, whatever depth is requested.
///
/// Recursion uses one stack frame per ply. Pools larger than this are
/// still playable, but scored as undecided beyond the cap.
pub const MAX_SEARCH_DEPTH: u32 = 1024;

/// What the root score says about the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Forecast {
    /// The player to move wins with best play.
    Win,
    /// The player to move loses against best play.
    Loss,
    /// No decided line within the search depth.
    Undecided,
}

/// Move chosen by a search, with its negamax score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best move for the player to move.
    pub best_move: Move,

    /// Score of `best_move` from the mover's perspective.
    pub score: i32,

    /// Whether the score is a forced result.
    pub forecast: Forecast,
}

/// Source of searched moves.
///
/// Agents call through this trait so the search can be swapped or
/// instrumented without touching the player or driver.
pub trait MoveSearch<E: RulesEngine> {
    /// Choose the best move for the player to move, looking `depth` plies ahead.
    fn choose_move(&mut self, rules: &E, state: &mut GameState, depth: u32)
        -> Result<SearchResult>;
}

/// Negamax search context.
///
/// Owns the configuration and accumulated statistics. Generic over the
/// rules engine at each call, so one searcher can serve any variant.
#[derive(Clone, Debug, Default)]
pub struct NegamaxSearch {
    config: SearchConfig,
    stats: SearchStats,
}

impl NegamaxSearch {
    /// Create a new search context.
    ///
    /// Fails with `InvalidConfig` if the config does not validate.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            stats: SearchStats::default(),
        })
    }

    /// Negamax value of `state` for the player to move.
    ///
    /// Terminal positions score `±win_score`; positions where the depth
    /// runs out score 0.
    pub fn evaluate<E: RulesEngine>(
        &mut self,
        rules: &E,
        state: &mut GameState,
        depth: u32,
    ) -> Result<i32> {
        let before = *state;
        let depth = Self::effective_depth(state, depth);
        let value = self.negamax(rules, state, depth, 0, -INFINITY, INFINITY);
        debug_assert_eq!(*state, before, "search must restore the state");
        value
    }

    /// Choose the best move using the configured default depth.
    pub fn best_move<E: RulesEngine>(
        &mut self,
        rules: &E,
        state: &mut GameState,
    ) -> Result<SearchResult> {
        let depth = self.config.depth;
        self.search_root(rules, state, depth)
    }

    /// Root search: like `negamax` one ply up, remembering which move won.
    ///
    /// Ties go to the first move in `legal_moves` order, i.e. the smallest.
    #[instrument(level = "debug", skip(self, rules, state), fields(remaining = state.remaining(), turn = %state.turn()))]
    fn search_root<E: RulesEngine>(
        &mut self,
        rules: &E,
        state: &mut GameState,
        depth: u32,
    ) -> Result<SearchResult> {
        if rules.is_over(state) {
            return Err(EngineError::invalid_state(
                "cannot search a finished game",
            ));
        }
        if depth == 0 {
            return Err(EngineError::invalid_state(
                "search depth must be at least 1",
            ));
        }

        let depth = Self::effective_depth(state, depth);
        let start = Instant::now();
        let before = *state;
        let mut alpha = -INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for mv in rules.legal_moves(state) {
            rules.apply(state, mv)?;
            let child = self.negamax(rules, state, depth - 1, 1, -INFINITY, -alpha);
            rules.undo(state, mv);
            let score = -child?;

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
            if self.config.alpha_beta {
                alpha = alpha.max(score);
            }
        }
        debug_assert_eq!(*state, before, "search must restore the state");

        self.stats.searches += 1;
        self.stats.time_us += start.elapsed().as_micros() as u64;

        let (best_move, score) =
            best.ok_or_else(|| EngineError::invalid_state("no legal moves in a live game"))?;
        let forecast = self.forecast(score);
        debug!(best_move = best_move.0, score, ?forecast, "search complete");

        Ok(SearchResult {
            best_move,
            score,
            forecast,
        })
    }

    fn negamax<E: RulesEngine>(
        &mut self,
        rules: &E,
        state: &mut GameState,
        depth: u32,
        ply: u32,
        mut alpha: i32,
        beta: i32,
    ) -> Result<i32> {
        self.stats.nodes += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        if depth == 0 || rules.is_over(state) {
            self.stats.leaves += 1;
            return Ok(rules.terminal_score(state, self.config.win_score));
        }

        let mut best = -INFINITY;
        for mv in rules.legal_moves(state) {
            rules.apply(state, mv)?;
            let child = self.negamax(rules, state, depth - 1, ply + 1, -beta, -alpha);
            rules.undo(state, mv);
            let score = -child?;

            best = best.max(score);
            if self.config.alpha_beta {
                alpha = alpha.max(score);
                if alpha >= beta {
                    break;
                }
            }
        }
        Ok(best)
    }

    /// Every move takes at least one unit, so no line outlasts the pool.
    fn effective_depth(state: &GameState, depth: u32) -> u32 {
        depth.min(state.remaining()).min(MAX_SEARCH_DEPTH)
    }

    fn forecast(&self, score: i32) -> Forecast {
        if score >= self.config.win_score {
            Forecast::Win
        } else if score <= -self.config.win_score {
            Forecast::Loss
        } else {
            Forecast::Undecided
        }
    }

    /// Get accumulated search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Reset accumulated statistics.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl<E: RulesEngine> MoveSearch<E> for NegamaxSearch {
    fn choose_move(
        &mut self,
        rules: &E,
        state: &mut GameState,
        depth: u32,
    ) -> Result<SearchResult> {
        self.search_root(rules, state, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, PlayerId, TerminalPolicy};
    use crate::rules::SubtractionRules;

    fn rules(max_take: u8, initial: u32) -> SubtractionRules {
        SubtractionRules::new(GameConfig::new(max_take, initial)).unwrap()
    }

    #[test]
    fn test_takes_last_unit_when_possible() {
        let r = rules(3, 21);
        let mut state = GameState::at(21, 3, PlayerId::FIRST);
        let mut search = NegamaxSearch::default();

        let result = search.choose_move(&r, &mut state, 5).unwrap();
        assert_eq!(result.best_move, Move::new(3));
        assert_eq!(result.score, 100);
        assert_eq!(result.forecast, Forecast::Win);
    }

    #[test]
    fn test_leaves_multiple_of_k_plus_one() {
        let r = rules(3, 21);
        let mut state = GameState::at(21, 21, PlayerId::FIRST);
        let mut search = NegamaxSearch::default();

        // 21 % 4 == 1: take 1 to leave 20.
        let result = search.choose_move(&r, &mut state, 21).unwrap();
        assert_eq!(result.best_move, Move::new(1));
        assert_eq!(result.forecast, Forecast::Win);
    }

    #[test]
    fn test_lost_position_prefers_smallest_move() {
        let r = rules(2, 12);
        let mut state = GameState::at(12, 12, PlayerId::FIRST);
        let mut search = NegamaxSearch::default();

        let result = search.choose_move(&r, &mut state, 12).unwrap();
        assert_eq!(result.best_move, Move::new(1));
        assert_eq!(result.score, -100);
        assert_eq!(result.forecast, Forecast::Loss);
    }

    #[test]
    fn test_misere_avoids_last_unit() {
        let r = SubtractionRules::new(
            GameConfig::new(3, 21).with_policy(TerminalPolicy::LastMoverLoses),
        )
        .unwrap();
        let mut state = GameState::at(21, 3, PlayerId::FIRST);
        let mut search = NegamaxSearch::default();

        // Leave exactly one for the opponent.
        let result = search.choose_move(&r, &mut state, 5).unwrap();
        assert_eq!(result.best_move, Move::new(2));
        assert_eq!(result.forecast, Forecast::Win);
    }

    #[test]
    fn test_depth_exhausted_scores_zero() {
        let r = rules(3, 21);
        let mut state = r.initial_state();
        let mut search = NegamaxSearch::default();

        let result = search.choose_move(&r, &mut state, 1).unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, Move::new(1));
        assert_eq!(result.forecast, Forecast::Undecided);
    }

    #[test]
    fn test_search_restores_state() {
        let r = rules(3, 21);
        let mut state = GameState::at(21, 13, PlayerId::SECOND);
        let before = state;
        let mut search = NegamaxSearch::default();

        search.choose_move(&r, &mut state, 13).unwrap();
        assert_eq!(state, before);

        search.evaluate(&r, &mut state, 13).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_rejects_finished_game() {
        let r = rules(3, 21);
        let mut state = GameState::at(21, 0, PlayerId::FIRST);
        let mut search = NegamaxSearch::default();

        let err = search.choose_move(&r, &mut state, 5).unwrap_err();
        assert!(matches!(err, EngineError::InvalidState { .. }));
    }

    #[test]
    fn test_rejects_zero_depth() {
        let r = rules(3, 21);
        let mut state = r.initial_state();
        let mut search = NegamaxSearch::default();

        let err = search.choose_move(&r, &mut state, 0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidState { .. }));
    }

    #[test]
    fn test_alpha_beta_agrees_and_prunes() {
        let r = rules(3, 21);
        let mut plain = NegamaxSearch::default();
        let mut pruned =
            NegamaxSearch::new(SearchConfig::default().with_alpha_beta(true)).unwrap();

        for remaining in 1..=16 {
            let mut state = GameState::at(21, remaining, PlayerId::FIRST);
            let a = plain.choose_move(&r, &mut state, remaining).unwrap();
            let b = pruned.choose_move(&r, &mut state, remaining).unwrap();
            assert_eq!(a.best_move, b.best_move, "remaining = {remaining}");
            assert_eq!(a.score, b.score, "remaining = {remaining}");
        }

        assert!(pruned.stats().nodes < plain.stats().nodes);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        for win_score in [0, -100, i32::MIN] {
            let config = SearchConfig::default().with_win_score(win_score);
            assert!(matches!(
                NegamaxSearch::new(config),
                Err(EngineError::InvalidConfig { .. })
            ));
        }

        let config: SearchConfig = serde_json::from_str(r#"{"win_score": -5}"#).unwrap();
        assert!(NegamaxSearch::new(config).is_err());
    }

    #[test]
    fn test_depth_clamped_to_pool() {
        let r = rules(3, 21);
        let mut state = GameState::at(21, 5, PlayerId::FIRST);
        let mut search = NegamaxSearch::default();

        let result = search.choose_move(&r, &mut state, u32::MAX).unwrap();
        assert_eq!(result.best_move, Move::new(1));
        assert!(search.stats().max_ply <= 5);
    }

    #[test]
    fn test_huge_pool_stops_at_depth_cap() {
        let r = rules(1, 1_000_000);
        let mut state = r.initial_state();
        let mut search = NegamaxSearch::default();

        let result = search.choose_move(&r, &mut state, u32::MAX).unwrap();
        assert_eq!(result.forecast, Forecast::Undecided);
        assert_eq!(search.stats().max_ply, MAX_SEARCH_DEPTH);
        assert_eq!(state, r.initial_state());
    }

    #[test]
    fn test_stats_accumulate() {
        let r = rules(2, 12);
        let mut state = r.initial_state();
        let mut search = NegamaxSearch::default();

        search.best_move(&r, &mut state).unwrap();
        let stats = search.stats();
        assert_eq!(stats.searches, 1);
        assert!(stats.nodes > 0);
        assert!(stats.leaves > 0);
        assert!(stats.max_ply >= 11);

        search.reset_stats();
        assert_eq!(search.stats().searches, 0);
    }
}
