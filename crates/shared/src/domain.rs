use serde::Serialize;

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 15;
/// Key the host persists the current score under.
pub const CURRENT_SCORE_KEY: &str = "CURRENT_SCORE";

pub fn clamp_score(raw: i64) -> i64 {
    raw.clamp(MIN_SCORE, MAX_SCORE)
}

/// Bounded score plus its derived win flag.
///
/// Only constructible through [`ScoreState::from_value`], which clamps, so
/// `won == (value == MAX_SCORE)` holds for every instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreState {
    value: i64,
    won: bool,
}

impl ScoreState {
    pub fn from_value(raw: i64) -> Self {
        let value = clamp_score(raw);
        Self {
            value,
            won: value == MAX_SCORE,
        }
    }

    pub fn initial() -> Self {
        Self::from_value(MIN_SCORE)
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn won(&self) -> bool {
        self.won
    }
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
