//! Search-backed agent with an optional "distracted" noise policy.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameRng, GameState, Move};
use crate::error::{EngineError, Result};
use crate::rules::RulesEngine;
use crate::search::MoveSearch;

/// Agent configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Search depth in plies.
    pub depth: u32,

    /// Chance in `[0, 1]` to ignore the search and play a random legal move.
    pub noise_probability: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            depth: 12,
            noise_probability: 0.0,
        }
    }
}

impl AgentConfig {
    /// Perfect-play agent searching `depth` plies.
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            noise_probability: 0.0,
        }
    }

    /// Set the noise probability.
    pub fn with_noise(mut self, probability: f64) -> Self {
        self.noise_probability = probability;
        self
    }

    /// Check the config is usable.
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(EngineError::invalid_config("agent depth must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.noise_probability) {
            return Err(EngineError::invalid_config(format!(
                "noise_probability must be within [0, 1], got {}",
                self.noise_probability
            )));
        }
        Ok(())
    }
}

/// How an agent arrived at its move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Move came from the search.
    Searched,
    /// Noise fired; move was drawn uniformly from the legal moves.
    Random,
}

/// Engine-backed player.
#[derive(Clone, Debug)]
pub struct AgentPlayer {
    config: AgentConfig,
    rng: GameRng,
}

impl AgentPlayer {
    /// Create an agent with its own noise stream.
    pub fn new(config: AgentConfig, rng: GameRng) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Create a noiseless agent searching `depth` plies.
    pub fn perfect(depth: u32) -> Result<Self> {
        Self::new(AgentConfig::new(depth), GameRng::new(0))
    }

    /// Produce a move for the player to move.
    ///
    /// With probability `noise_probability` a uniformly random legal move is
    /// returned and `search` is not consulted. A noiseless agent never draws
    /// from its RNG.
    pub fn produce_move<E, S>(
        &mut self,
        rules: &E,
        state: &mut GameState,
        search: &mut S,
    ) -> Result<(Move, Decision)>
    where
        E: RulesEngine,
        S: MoveSearch<E> + ?Sized,
    {
        if self.config.noise_probability > 0.0
            && self.rng.next_unit() < self.config.noise_probability
        {
            let moves = rules.legal_moves(state);
            let mv = *self
                .rng
                .choose(&moves)
                .ok_or_else(|| EngineError::invalid_state("no legal moves in a finished game"))?;
            debug!(mv = mv.0, "agent distracted, playing a random move");
            return Ok((mv, Decision::Random));
        }

        let result = search.choose_move(rules, state, self.config.depth)?;
        debug!(mv = result.best_move.0, score = result.score, "agent searched");
        Ok((result.best_move, Decision::Searched))
    }

    /// Get the configuration.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Get the noise RNG (for checkpointing via `GameRng::state`).
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }
}
