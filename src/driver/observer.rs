//! Match event observers.
//!
//! The driver notifies an injected observer of discrete events instead of
//! reaching for process-wide sound or score singletons. Notifications are
//! fire-and-forget: nothing an observer does feeds back into the match.

use crate::core::{GameState, MoveRecord};

use super::outcome::MatchOutcome;

/// Receiver of match events (audio cues, score reporting, logs).
pub trait MatchObserver {
    /// A move was applied. `state` is the position after the move.
    fn move_applied(&mut self, _record: &MoveRecord, _state: &GameState) {}

    /// The match ended. Called exactly once per match.
    fn game_over(&mut self, _outcome: &MatchOutcome) {}
}

impl<T: MatchObserver + ?Sized> MatchObserver for &mut T {
    fn move_applied(&mut self, record: &MoveRecord, state: &GameState) {
        (**self).move_applied(record, state);
    }

    fn game_over(&mut self, outcome: &MatchOutcome) {
        (**self).game_over(outcome);
    }
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl MatchObserver for NullObserver {}

/// A single recorded event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchEvent {
    MoveApplied(MoveRecord),
    GameOver(MatchOutcome),
}

/// Observer that keeps every event, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    events: Vec<MatchEvent>,
}

impl RecordingObserver {
    /// An observer with no events recorded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events seen so far.
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Number of `game_over` notifications.
    pub fn games_over(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, MatchEvent::GameOver(_)))
            .count()
    }

    /// Moves applied, in order.
    pub fn moves(&self) -> impl Iterator<Item = &MoveRecord> {
        self.events.iter().filter_map(|e| match e {
            MatchEvent::MoveApplied(record) => Some(record),
            MatchEvent::GameOver(_) => None,
        })
    }
}

impl MatchObserver for RecordingObserver {
    fn move_applied(&mut self, record: &MoveRecord, _state: &GameState) {
        self.events.push(MatchEvent::MoveApplied(*record));
    }

    fn game_over(&mut self, outcome: &MatchOutcome) {
        self.events.push(MatchEvent::GameOver(*outcome));
    }
}
