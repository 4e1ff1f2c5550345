use crossbeam_channel::{Sender, TrySendError};
use shared::domain::ScoreState;
use tracing::{debug, info, warn};

pub mod notify;
pub mod persistence;
pub mod presentation;

pub use notify::{SoundCue, SoundPlayer, WinNotifier};
pub use persistence::{persist_controller, restore_controller, MemoryScoreStore, ScoreStore};
pub use presentation::{DisplayModel, Highlight, ScorePresenter, DEFAULT_WINNING_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreEvent {
    /// Emitted after every operation with the resulting state.
    StateChanged(ScoreState),
    /// Emitted once per transition into the won state, before `StateChanged`.
    Won(ScoreState),
}

pub trait ScoreObserver {
    fn on_score_event(&mut self, event: &ScoreEvent);
}

impl ScoreObserver for Sender<ScoreEvent> {
    fn on_score_event(&mut self, event: &ScoreEvent) {
        match self.try_send(*event) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => warn!("score event queue is full; dropping event"),
            Err(TrySendError::Disconnected(_)) => {
                debug!("score event receiver dropped; skipping event")
            }
        }
    }
}

/// Owns the bounded score and notifies observers of every transition.
///
/// All operations are total: out-of-range steps are clamped, never rejected.
/// Deciding whether an operation should be offered at all (e.g. decrement
/// while won) is left to the presentation layer.
pub struct ScoreController {
    state: ScoreState,
    observers: Vec<Box<dyn ScoreObserver>>,
}

impl Default for ScoreController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreController {
    pub fn new() -> Self {
        Self {
            state: ScoreState::initial(),
            observers: Vec::new(),
        }
    }

    /// Rebuilds a controller from a persisted raw value, clamping it into range.
    pub fn restore(raw: i64) -> Self {
        let state = ScoreState::from_value(raw);
        if state.value() != raw {
            warn!(
                raw,
                restored = state.value(),
                "persisted score out of range; clamped"
            );
        }
        info!(value = state.value(), won = state.won(), "score restored");
        Self {
            state,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn ScoreObserver>) {
        self.observers.push(observer);
    }

    pub fn current_state(&self) -> ScoreState {
        self.state
    }

    pub fn increment(&mut self) -> ScoreState {
        self.apply(1)
    }

    pub fn decrement(&mut self) -> ScoreState {
        self.apply(-1)
    }

    pub fn reset(&mut self) -> ScoreState {
        self.state = ScoreState::initial();
        info!(value = self.state.value(), "score reset");
        self.emit(ScoreEvent::StateChanged(self.state));
        self.state
    }

    /// Applies a clamped step. The win signal fires only when the step moves
    /// the score from below the maximum onto it.
    pub fn apply(&mut self, delta: i64) -> ScoreState {
        let previous = self.state;
        self.state = ScoreState::from_value(previous.value().saturating_add(delta));

        if self.state.won() {
            info!(value = self.state.value(), "max score reached");
            if !previous.won() {
                self.emit(ScoreEvent::Won(self.state));
            }
        } else {
            info!(value = self.state.value(), "score updated");
        }

        self.emit(ScoreEvent::StateChanged(self.state));
        self.state
    }

    fn emit(&mut self, event: ScoreEvent) {
        for observer in &mut self.observers {
            observer.on_score_event(&event);
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
