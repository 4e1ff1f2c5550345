use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use score_core::ScoreStore;
use serde::Serialize;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Row, Sqlite,
};
use std::{fs, path::Path, str::FromStr};
use tracing::debug;

use shared::domain::ScoreState;

#[derive(Clone)]
pub struct Storage {
    pool: Pool<Sqlite>,
}

/// Raw persisted row. `value` is whatever was written, not necessarily in range.
#[derive(Debug, Clone, Serialize)]
pub struct StoredScore {
    pub key: String,
    pub value: i64,
    pub updated_at: DateTime<Utc>,
}

impl StoredScore {
    /// State the app would restore from this row.
    pub fn restored_state(&self) -> ScoreState {
        ScoreState::from_value(self.value)
    }
}

impl Storage {
    pub async fn new(database_url: &str) -> Result<Self> {
        create_database_dir(database_url)?;

        let connect_options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("invalid database url '{database_url}'"))?
            .create_if_missing(true);
        // every in-memory connection is its own database
        let max_connections = if is_memory_url(database_url) { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(connect_options)
            .await
            .with_context(|| format!("failed to open sqlite database '{database_url}'"))?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("failed to run score_state migrations")?;
        debug!(database_url, "score storage ready");
        Ok(Self { pool })
    }

    pub async fn health_check(&self) -> Result<()> {
        let _: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("sqlite ping failed")?;
        Ok(())
    }

    pub async fn load_snapshot(&self, key: &str) -> Result<Option<StoredScore>> {
        let row = sqlx::query("SELECT key, value, updated_at FROM score_state WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("failed to load score '{key}'"))?;
        row.map(|r| -> Result<StoredScore> {
            Ok(StoredScore {
                key: r.try_get::<String, _>(0)?,
                value: r.try_get::<i64, _>(1)?,
                updated_at: r.try_get::<DateTime<Utc>, _>(2)?,
            })
        })
        .transpose()
    }
}

#[async_trait]
impl ScoreStore for Storage {
    async fn load_score(&self, key: &str) -> Result<Option<i64>> {
        let value = sqlx::query_scalar::<_, i64>("SELECT value FROM score_state WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("failed to load score '{key}'"))?;
        Ok(value)
    }

    async fn save_score(&self, key: &str, value: i64) -> Result<()> {
        sqlx::query(
            "INSERT INTO score_state (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .with_context(|| format!("failed to save score '{key}'"))?;
        Ok(())
    }

    async fn clear_score(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM score_state WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to clear score '{key}'"))?;
        Ok(())
    }
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.starts_with("sqlite::memory:") || database_url.contains("mode=memory")
}

/// Turns a bare file path into a `sqlite://` url; urls pass through untouched.
/// Blank input maps to `default_url`.
pub fn normalize_database_url(raw: &str, default_url: &str) -> String {
    let raw = raw.trim();
    match raw {
        "" => default_url.to_string(),
        url if url.starts_with("sqlite:") || url.contains("://") => url.to_string(),
        path => format!("sqlite://{}", path.replace('\\', "/")),
    }
}

/// File backing a sqlite url, if the url names one.
fn database_file(database_url: &str) -> Option<&Path> {
    if is_memory_url(database_url) {
        return None;
    }
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let file = rest.split_once('?').map_or(rest, |(file, _)| file);
    (!file.is_empty()).then(|| Path::new(file))
}

fn create_database_dir(database_url: &str) -> Result<()> {
    let Some(dir) = database_file(database_url)
        .and_then(Path::parent)
        .filter(|dir| !dir.as_os_str().is_empty())
    else {
        return Ok(());
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create database directory '{}'", dir.display()))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
