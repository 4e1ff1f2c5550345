//! View-model the presentation layer renders from a [`ScoreState`].

use shared::domain::ScoreState;

use crate::{ScoreEvent, ScoreObserver};

pub const DEFAULT_WINNING_MESSAGE: &str = "That's a Wrap";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Normal,
    Winning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
    pub score_text: String,
    pub highlight: Highlight,
    pub winning_message: Option<String>,
    pub decrement_enabled: bool,
}

impl DisplayModel {
    pub fn from_state(state: &ScoreState, winning_message: &str) -> Self {
        if state.won() {
            Self {
                score_text: state.value().to_string(),
                highlight: Highlight::Winning,
                winning_message: Some(winning_message.to_string()),
                decrement_enabled: false,
            }
        } else {
            Self {
                score_text: state.value().to_string(),
                highlight: Highlight::Normal,
                winning_message: None,
                decrement_enabled: true,
            }
        }
    }
}

/// Keeps the latest [`DisplayModel`] in step with the controller's events.
pub struct ScorePresenter {
    winning_message: String,
    model: DisplayModel,
}

impl ScorePresenter {
    pub fn new(initial: ScoreState, winning_message: impl Into<String>) -> Self {
        let winning_message = winning_message.into();
        let model = DisplayModel::from_state(&initial, &winning_message);
        Self {
            winning_message,
            model,
        }
    }

    pub fn model(&self) -> &DisplayModel {
        &self.model
    }
}

impl ScoreObserver for ScorePresenter {
    fn on_score_event(&mut self, event: &ScoreEvent) {
        if let ScoreEvent::StateChanged(state) = event {
            self.model = DisplayModel::from_state(state, &self.winning_message);
        }
    }
}

#[cfg(test)]
#[path = "tests/presentation_tests.rs"]
mod tests;
