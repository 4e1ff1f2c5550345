use super::*;
use score_core::{MemoryScoreStore, ScoreController, DEFAULT_WINNING_MESSAGE};

fn session(start: i64) -> Session<Vec<u8>> {
    Session::new(
        ScoreController::restore(start),
        DEFAULT_WINNING_MESSAGE,
        None,
        false,
        Vec::new(),
    )
}

#[tokio::test]
async fn invalid_utf8_line_is_skipped_not_fatal() {
    let store = MemoryScoreStore::new();
    let mut session = session(0);

    drive(&mut session, &store, &b"inc\ninc\n\xff\ninc\n"[..])
        .await
        .expect("drive");

    assert_eq!(session.controller().current_state().value(), 3);
}

#[tokio::test]
async fn save_persists_mid_session() {
    let store = MemoryScoreStore::new();
    let mut session = session(0);

    drive(&mut session, &store, &b"inc\nsave\ninc\n"[..])
        .await
        .expect("drive");

    assert_eq!(
        store.load_score(CURRENT_SCORE_KEY).await.expect("load"),
        Some(1)
    );
    assert_eq!(session.controller().current_state().value(), 2);
}

#[tokio::test]
async fn quit_stops_reading_input() {
    let store = MemoryScoreStore::new();
    let mut session = session(5);

    drive(&mut session, &store, &b"inc\r\nquit\ninc\n"[..])
        .await
        .expect("drive");

    assert_eq!(session.controller().current_state().value(), 6);
}

#[tokio::test]
async fn last_line_without_newline_is_handled() {
    let store = MemoryScoreStore::new();
    let mut session = session(14);

    drive(&mut session, &store, &b"\n\ninc"[..])
        .await
        .expect("drive");

    assert!(session.controller().current_state().won());
}
