//! One interactive run: routes commands to the controller and redraws the
//! screen from the events it emits.

use std::io::{self, Write};

use crossbeam_channel::{unbounded, Receiver};
use score_core::{ScoreController, ScoreEvent, ScoreObserver, ScorePresenter, SoundCue, SoundPlayer};
use shared::error::HostError;
use tracing::{debug, warn};

use crate::{
    commands::{UserCommand, HELP_TEXT},
    render::render_display,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Save,
    Quit,
}

pub struct Session<W: Write> {
    controller: ScoreController,
    events: Receiver<ScoreEvent>,
    presenter: ScorePresenter,
    click: Option<Box<dyn SoundPlayer>>,
    color: bool,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(
        mut controller: ScoreController,
        winning_message: &str,
        click: Option<Box<dyn SoundPlayer>>,
        color: bool,
        out: W,
    ) -> Self {
        let (tx, events) = unbounded();
        controller.subscribe(Box::new(tx));
        let presenter = ScorePresenter::new(controller.current_state(), winning_message);
        Self {
            controller,
            events,
            presenter,
            click,
            color,
            out,
        }
    }

    pub fn controller(&self) -> &ScoreController {
        &self.controller
    }

    pub fn handle(&mut self, command: UserCommand) -> io::Result<Flow> {
        debug!(command = command.name(), "handling command");
        match command {
            UserCommand::Increment => {
                self.press();
                self.controller.increment();
            }
            UserCommand::Decrement => {
                // the controller would clamp; the affordance is what gets disabled
                if !self.presenter.model().decrement_enabled {
                    writeln!(self.out, "decrement is disabled while the score is won")?;
                    return Ok(Flow::Continue);
                }
                self.press();
                self.controller.decrement();
            }
            UserCommand::Reset => {
                self.press();
                self.controller.reset();
            }
            UserCommand::Show => {}
            UserCommand::Save => return Ok(Flow::Save),
            UserCommand::Help => {
                writeln!(self.out, "{HELP_TEXT}")?;
                return Ok(Flow::Continue);
            }
            UserCommand::Quit => return Ok(Flow::Quit),
        }
        self.render()?;
        Ok(Flow::Continue)
    }

    pub fn report(&mut self, err: &HostError) -> io::Result<()> {
        warn!(code = ?err.code(), error = %err, "rejected input");
        writeln!(self.out, "{err}")
    }

    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")
    }

    pub fn render(&mut self) -> io::Result<()> {
        for event in self.events.try_iter() {
            self.presenter.on_score_event(&event);
        }
        let screen = render_display(self.presenter.model(), self.color);
        writeln!(self.out, "{screen}")?;
        self.out.flush()
    }

    fn press(&mut self) {
        if let Some(click) = self.click.as_mut() {
            if let Err(err) = click.play(SoundCue::Click) {
                warn!(error = %err, "click cue playback failed");
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
