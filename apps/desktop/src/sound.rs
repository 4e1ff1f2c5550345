//! Terminal-bell sound cues.
//!
//! Cues are acquired together when the bank is built and released when the
//! last handle drops.

use std::{cell::RefCell, collections::HashSet, io::Write, rc::Rc};

use score_core::{SoundCue, SoundPlayer};
use shared::error::HostError;
use tracing::{debug, info};

const BELL: &[u8] = b"\x07";

struct SoundBankInner<W: Write> {
    cues: HashSet<SoundCue>,
    out: W,
}

impl<W: Write> Drop for SoundBankInner<W> {
    fn drop(&mut self) {
        info!(cues = self.cues.len(), "sound cues released");
    }
}

/// Shared handle: the win notifier and the click feedback play through the
/// same acquired cues.
pub struct SoundBank<W: Write> {
    inner: Rc<RefCell<SoundBankInner<W>>>,
}

impl<W: Write> Clone for SoundBank<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<W: Write> SoundBank<W> {
    pub fn acquire(cues: impl IntoIterator<Item = SoundCue>, out: W) -> Self {
        let cues: HashSet<SoundCue> = cues.into_iter().collect();
        info!(cues = cues.len(), "sound cues acquired");
        Self {
            inner: Rc::new(RefCell::new(SoundBankInner { cues, out })),
        }
    }
}

impl<W: Write> SoundPlayer for SoundBank<W> {
    fn play(&mut self, cue: SoundCue) -> Result<(), HostError> {
        let mut inner = self.inner.borrow_mut();
        if !inner.cues.contains(&cue) {
            return Err(HostError::sound_unavailable(cue.name(), "cue not acquired"));
        }
        inner
            .out
            .write_all(BELL)
            .and_then(|()| inner.out.flush())
            .map_err(|err| HostError::sound_unavailable(cue.name(), err.to_string()))?;
        debug!(cue = cue.name(), "cue played");
        Ok(())
    }
}
