//! Formatting for `tools show`.

use serde::Serialize;
use shared::domain::ScoreState;
use storage::StoredScore;

/// Raw stored row next to the state the app would restore from it.
#[derive(Debug, Serialize)]
pub struct ShowReport<'a> {
    #[serde(flatten)]
    pub stored: &'a StoredScore,
    pub restored: ScoreState,
}

impl<'a> ShowReport<'a> {
    pub fn new(stored: &'a StoredScore) -> Self {
        Self {
            stored,
            restored: stored.restored_state(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_text(&self) -> String {
        format!(
            "{}={} (restores as value={} won={}, updated {})",
            self.stored.key,
            self.stored.value,
            self.restored.value(),
            self.restored.won(),
            self.stored.updated_at
        )
    }
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
