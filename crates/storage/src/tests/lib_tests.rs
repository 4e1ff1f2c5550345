use super::*;
use shared::domain::CURRENT_SCORE_KEY;

#[tokio::test]
async fn health_check_succeeds_for_live_pool() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.health_check().await.expect("health check");
}

#[tokio::test]
async fn missing_key_loads_none() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    assert_eq!(
        storage.load_score(CURRENT_SCORE_KEY).await.expect("load"),
        None
    );
    assert!(storage
        .load_snapshot(CURRENT_SCORE_KEY)
        .await
        .expect("snapshot")
        .is_none());
}

#[tokio::test]
async fn save_overwrites_previous_value() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.save_score(CURRENT_SCORE_KEY, 3).await.expect("save");
    storage.save_score(CURRENT_SCORE_KEY, 11).await.expect("save");

    assert_eq!(
        storage.load_score(CURRENT_SCORE_KEY).await.expect("load"),
        Some(11)
    );
}

#[tokio::test]
async fn snapshot_reports_raw_value_and_restored_state() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.save_score(CURRENT_SCORE_KEY, 20).await.expect("save");

    let snapshot = storage
        .load_snapshot(CURRENT_SCORE_KEY)
        .await
        .expect("snapshot")
        .expect("row");
    assert_eq!(snapshot.key, CURRENT_SCORE_KEY);
    assert_eq!(snapshot.value, 20);
    assert_eq!(snapshot.restored_state().value(), 15);
    assert!(snapshot.restored_state().won());
}

#[tokio::test]
async fn clear_removes_row() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.save_score(CURRENT_SCORE_KEY, 5).await.expect("save");
    storage.clear_score(CURRENT_SCORE_KEY).await.expect("clear");
    assert_eq!(
        storage.load_score(CURRENT_SCORE_KEY).await.expect("load"),
        None
    );
}

#[test]
fn memory_urls_have_no_file_path() {
    assert_eq!(database_file("sqlite::memory:"), None);
    assert_eq!(
        database_file("sqlite://./data/score.db?mode=rwc"),
        Some(Path::new("./data/score.db"))
    );
    assert_eq!(database_file("sqlite:score.db"), Some(Path::new("score.db")));
    assert_eq!(database_file("postgres://localhost/db"), None);
}

#[test]
fn bare_file_in_cwd_needs_no_directory() {
    create_database_dir("sqlite://score.db").expect("no dir to create");
}

#[test]
fn normalizes_plain_paths_and_keeps_urls() {
    let fallback = "sqlite://./data/fallback.db";
    assert_eq!(
        normalize_database_url("./data/test.db", fallback),
        "sqlite://./data/test.db"
    );
    assert_eq!(
        normalize_database_url("data\\win.db", fallback),
        "sqlite://data/win.db"
    );
    assert_eq!(
        normalize_database_url("sqlite::memory:", fallback),
        "sqlite::memory:"
    );
    assert_eq!(normalize_database_url("   ", fallback), fallback);
}
