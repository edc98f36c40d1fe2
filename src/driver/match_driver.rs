//! Turn-alternating match driver.
//!
//! The driver exclusively owns the `GameState`. The search borrows it for
//! the duration of one `choose_move` call and hands it back unchanged, so
//! no other component ever sees a half-applied position.

use im::Vector;
use tracing::{info, instrument};

use crate::core::{GameState, Move, MoveRecord, PlayerId, PlayerMap};
use crate::error::{EngineError, Result};
use crate::player::{Decision, Player};
use crate::rules::RulesEngine;
use crate::search::MoveSearch;

use super::observer::{MatchObserver, NullObserver};
use super::outcome::{MatchOutcome, MatchPhase};

/// A single match between two seats.
///
/// Generic over the rules engine, the search agents consult, and the
/// observer that receives move and game-over events.
pub struct Match<E, S, O = NullObserver>
where
    E: RulesEngine,
    S: MoveSearch<E>,
    O: MatchObserver,
{
    rules: E,
    state: GameState,
    players: PlayerMap<Player>,
    search: S,
    observer: O,
    phase: MatchPhase,
    history: Vector<MoveRecord>,
    outcome: Option<MatchOutcome>,
}

impl<E, S, O> Match<E, S, O>
where
    E: RulesEngine,
    S: MoveSearch<E>,
    O: MatchObserver,
{
    /// Start a match from the variant's configured opening position.
    pub fn new(rules: E, players: PlayerMap<Player>, search: S, observer: O) -> Self {
        let config = rules.config();
        let state = GameState::new(config.initial, config.first_player);
        Self {
            rules,
            phase: MatchPhase::AwaitingMove(state.turn()),
            state,
            players,
            search,
            observer,
            history: Vector::new(),
            outcome: None,
        }
    }

    /// Start a match from an arbitrary live position.
    ///
    /// Fails with `InvalidState` if the position is already finished or was
    /// not set up for this variant's pool size. Ply numbering restarts from
    /// the position's own `ply()`.
    pub fn from_state(
        rules: E,
        state: GameState,
        players: PlayerMap<Player>,
        search: S,
        observer: O,
    ) -> Result<Self> {
        if rules.is_over(&state) {
            return Err(EngineError::invalid_state(
                "a match must start from a live position",
            ));
        }
        let initial = rules.config().initial;
        if state.initial() != initial {
            return Err(EngineError::invalid_state(format!(
                "position has a pool of {}, the variant starts at {initial}",
                state.initial()
            )));
        }
        Ok(Self {
            rules,
            phase: MatchPhase::AwaitingMove(state.turn()),
            state,
            players,
            search,
            observer,
            history: Vector::new(),
            outcome: None,
        })
    }

    // === Queries ===

    /// Current position (read-only).
    pub fn current_state(&self) -> &GameState {
        &self.state
    }

    /// Current driver phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Check if the match is finished.
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Winner, once the match is finished.
    pub fn winner_of(&self) -> Option<PlayerId> {
        match self.phase {
            MatchPhase::Over(winner) => Some(winner),
            MatchPhase::AwaitingMove(_) => None,
        }
    }

    /// Result reported at game over.
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    /// Seat to move, if it is waiting on external input.
    pub fn awaiting_human(&self) -> Option<PlayerId> {
        match self.phase {
            MatchPhase::AwaitingMove(p) if self.players[p].is_human() => Some(p),
            _ => None,
        }
    }

    /// Moves played so far. Cloning is O(1).
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Legal moves in the current position.
    pub fn legal_moves(&self) -> crate::core::MoveList {
        self.rules.legal_moves(&self.state)
    }

    /// Rules of the variant being played.
    pub fn rules(&self) -> &E {
        &self.rules
    }

    /// Move source for a seat.
    pub fn player(&self, seat: PlayerId) -> &Player {
        &self.players[seat]
    }

    /// Search shared by the agent seats (stats live here).
    pub fn search(&self) -> &S {
        &self.search
    }

    /// The injected observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    // === Transitions ===

    /// Apply a move supplied by the UI for the human seat to move.
    ///
    /// An illegal move returns `IllegalMove` and leaves the match exactly
    /// as it was; the caller should re-prompt.
    #[instrument(level = "debug", skip(self), fields(mv = mv.0))]
    pub fn submit_human_move(&mut self, mv: Move) -> Result<MatchPhase> {
        let seat = self.seat_to_move()?;
        match &self.players[seat] {
            Player::Human => self.play(seat, mv),
            Player::Agent(_) => Err(EngineError::NotAwaitingHuman { expected: seat }),
        }
    }

    /// Let the agent seat to move pick and play its move.
    #[instrument(level = "debug", skip(self))]
    pub fn step_agent(&mut self) -> Result<MatchPhase> {
        let seat = self.seat_to_move()?;
        let (mv, decision) = match &mut self.players[seat] {
            Player::Human => return Err(EngineError::AwaitingHuman { player: seat }),
            Player::Agent(agent) => {
                agent.produce_move(&self.rules, &mut self.state, &mut self.search)?
            }
        };
        if decision == Decision::Random {
            info!(%seat, mv = mv.0, "agent played a distracted move");
        }
        self.play(seat, mv)
    }

    /// Step agents until a human is to move or the match ends.
    pub fn run_agents(&mut self) -> Result<MatchPhase> {
        loop {
            match self.phase {
                MatchPhase::Over(_) => return Ok(self.phase),
                MatchPhase::AwaitingMove(p) if self.players[p].is_human() => {
                    return Ok(self.phase)
                }
                MatchPhase::AwaitingMove(_) => {
                    self.step_agent()?;
                }
            }
        }
    }

    /// Start over from the opening position with the same seats.
    pub fn restart(&mut self) {
        let config = self.rules.config();
        self.state = GameState::new(config.initial, config.first_player);
        self.phase = MatchPhase::AwaitingMove(self.state.turn());
        self.history = Vector::new();
        self.outcome = None;
    }

    fn seat_to_move(&self) -> Result<PlayerId> {
        match self.phase {
            MatchPhase::AwaitingMove(seat) => Ok(seat),
            MatchPhase::Over(_) => Err(EngineError::MatchOver),
        }
    }

    fn play(&mut self, seat: PlayerId, mv: Move) -> Result<MatchPhase> {
        self.rules.apply(&mut self.state, mv)?;

        let record = MoveRecord::new(seat, mv, self.state.remaining(), self.state.ply());
        self.history.push_back(record);
        self.observer.move_applied(&record, &self.state);

        if !self.rules.is_over(&self.state) {
            self.phase = MatchPhase::AwaitingMove(self.state.turn());
            return Ok(self.phase);
        }

        let winner = self
            .rules
            .winner_of(&self.state)
            .ok_or_else(|| EngineError::invalid_state("finished game without a winner"))?;
        let outcome = MatchOutcome::new(winner, self.state.ply());
        info!(%winner, plies = outcome.plies, "match over");

        self.phase = MatchPhase::Over(winner);
        self.outcome = Some(outcome);
        self.observer.game_over(&outcome);
        Ok(self.phase)
    }
}
