//! Input loop: raw stdin lines in, commands out, saves on request.
//!
//! Every way out of the loop returns to the caller so the score can be
//! persisted, including Ctrl-C and read errors.

use std::io::Write;

use anyhow::Result;
use score_core::{persist_controller, ScoreStore};
use shared::domain::CURRENT_SCORE_KEY;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

use crate::{
    commands::UserCommand,
    session::{Flow, Session},
};

pub async fn drive<R, W>(session: &mut Session<W>, store: &dyn ScoreStore, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut segments = input.split(b'\n');
    loop {
        let segment = tokio::select! {
            segment = segments.next_segment() => segment?,
            signal = tokio::signal::ctrl_c() => {
                signal?;
                info!("interrupted");
                break;
            }
        };
        let Some(bytes) = segment else {
            break;
        };

        // undecodable bytes become U+FFFD and fall out as an unknown command
        let line = String::from_utf8_lossy(&bytes);
        let command = match UserCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                session.report(&err)?;
                continue;
            }
        };

        match session.handle(command)? {
            Flow::Continue => {}
            Flow::Save => {
                persist_controller(store, CURRENT_SCORE_KEY, session.controller()).await?;
                session.notice("saved")?;
            }
            Flow::Quit => break,
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/repl_tests.rs"]
mod tests;
