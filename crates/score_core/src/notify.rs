//! Win notification: turns the one-shot win signal into a sound cue.

use std::fmt;

use shared::error::HostError;
use tracing::{info, warn};

use crate::{ScoreEvent, ScoreObserver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Win,
    /// General button feedback; when it plays is up to the host.
    Click,
}

impl SoundCue {
    pub fn name(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Click => "click",
        }
    }
}

impl fmt::Display for SoundCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Playback capability. Implementations own their audio resources and are
/// expected to release them on drop.
pub trait SoundPlayer {
    fn play(&mut self, cue: SoundCue) -> Result<(), HostError>;
}

pub struct WinNotifier<P> {
    player: P,
}

impl<P: SoundPlayer> WinNotifier<P> {
    pub fn new(player: P) -> Self {
        Self { player }
    }
}

impl<P: SoundPlayer> ScoreObserver for WinNotifier<P> {
    fn on_score_event(&mut self, event: &ScoreEvent) {
        let ScoreEvent::Won(state) = event else {
            return;
        };
        info!(value = state.value(), "playing win cue");
        if let Err(err) = self.player.play(SoundCue::Win) {
            warn!(error = %err, "win cue playback failed");
        }
    }
}

#[cfg(test)]
#[path = "tests/notify_tests.rs"]
mod tests;
