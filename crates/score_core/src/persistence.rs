//! Save/restore of the single persisted integer.
//!
//! Only `value` is stored. `won` is always re-derived on restore.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::ScoreController;

#[async_trait]
pub trait ScoreStore: Send + Sync {
    async fn load_score(&self, key: &str) -> Result<Option<i64>>;
    async fn save_score(&self, key: &str, value: i64) -> Result<()>;
    async fn clear_score(&self, key: &str) -> Result<()>;
}

#[derive(Default)]
pub struct MemoryScoreStore {
    values: Mutex<HashMap<String, i64>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScoreStore for MemoryScoreStore {
    async fn load_score(&self, key: &str) -> Result<Option<i64>> {
        Ok(self.values.lock().await.get(key).copied())
    }

    async fn save_score(&self, key: &str, value: i64) -> Result<()> {
        self.values.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn clear_score(&self, key: &str) -> Result<()> {
        self.values.lock().await.remove(key);
        Ok(())
    }
}

pub async fn restore_controller(store: &dyn ScoreStore, key: &str) -> Result<ScoreController> {
    match store.load_score(key).await? {
        Some(raw) => Ok(ScoreController::restore(raw)),
        None => {
            debug!(key, "no persisted score; starting from zero");
            Ok(ScoreController::new())
        }
    }
}

pub async fn persist_controller(
    store: &dyn ScoreStore,
    key: &str,
    controller: &ScoreController,
) -> Result<()> {
    let value = controller.current_state().value();
    store.save_score(key, value).await?;
    info!(key, value, "score saved");
    Ok(())
}

#[cfg(test)]
#[path = "tests/persistence_tests.rs"]
mod tests;
