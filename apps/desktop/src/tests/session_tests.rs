use std::{cell::RefCell, rc::Rc};

use super::*;
use score_core::{WinNotifier, DEFAULT_WINNING_MESSAGE};

#[derive(Clone, Default)]
struct CountingPlayer {
    played: Rc<RefCell<Vec<SoundCue>>>,
}

impl SoundPlayer for CountingPlayer {
    fn play(&mut self, cue: SoundCue) -> Result<(), HostError> {
        self.played.borrow_mut().push(cue);
        Ok(())
    }
}

fn session(start: i64, click: Option<Box<dyn SoundPlayer>>) -> Session<Vec<u8>> {
    Session::new(
        ScoreController::restore(start),
        DEFAULT_WINNING_MESSAGE,
        click,
        false,
        Vec::new(),
    )
}

fn output(session: &Session<Vec<u8>>) -> String {
    String::from_utf8_lossy(&session.out).into_owned()
}

#[test]
fn increment_to_max_renders_winning_screen() {
    let mut session = session(14, None);

    let flow = session.handle(UserCommand::Increment).expect("handle");

    assert_eq!(flow, Flow::Continue);
    let screen = output(&session);
    assert!(screen.contains("score: 15\n"));
    assert!(screen.contains("That's a Wrap"));
    assert!(screen.contains("[-] dec (disabled)"));
}

#[test]
fn decrement_is_blocked_by_the_presentation_layer_when_won() {
    let mut session = session(15, None);

    session.handle(UserCommand::Decrement).expect("handle");

    assert_eq!(session.controller().current_state().value(), 15);
    assert!(output(&session).contains("decrement is disabled"));
}

#[test]
fn reset_after_win_reenables_decrement() {
    let mut session = session(15, None);

    session.handle(UserCommand::Reset).expect("reset");
    session.handle(UserCommand::Increment).expect("inc");
    session.handle(UserCommand::Decrement).expect("dec");

    assert_eq!(session.controller().current_state().value(), 0);
    assert!(!output(&session).contains("decrement is disabled"));
}

#[test]
fn click_plays_on_button_presses_only() {
    let player = CountingPlayer::default();
    let played = player.played.clone();
    let mut session = session(3, Some(Box::new(player)));

    session.handle(UserCommand::Increment).expect("inc");
    session.handle(UserCommand::Show).expect("show");
    session.handle(UserCommand::Help).expect("help");
    session.handle(UserCommand::Reset).expect("reset");

    assert_eq!(*played.borrow(), vec![SoundCue::Click, SoundCue::Click]);
}

#[test]
fn win_notifier_subscribed_before_session_fires_once() {
    let player = CountingPlayer::default();
    let played = player.played.clone();
    let mut controller = ScoreController::restore(13);
    controller.subscribe(Box::new(WinNotifier::new(player)));
    let mut session = Session::new(controller, "Done", None, false, Vec::new());

    for _ in 0..4 {
        session.handle(UserCommand::Increment).expect("inc");
    }

    assert_eq!(*played.borrow(), vec![SoundCue::Win]);
}

#[test]
fn save_and_quit_are_returned_to_the_caller() {
    let mut session = session(2, None);
    assert_eq!(session.handle(UserCommand::Save).expect("save"), Flow::Save);
    assert_eq!(session.handle(UserCommand::Quit).expect("quit"), Flow::Quit);
    assert_eq!(session.controller().current_state().value(), 2);
}

#[test]
fn unknown_command_is_reported() {
    let mut session = session(0, None);
    let err = UserCommand::parse("jump").expect_err("unknown");
    session.report(&err).expect("report");
    assert!(output(&session).contains("unknown command 'jump'"));
}
