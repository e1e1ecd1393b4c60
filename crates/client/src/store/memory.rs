//! In-memory playback store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use gracesite_core::playback::{position_key, speed_key, MediaKind, PlaybackStore, Result};

use super::{check_position, check_speed};

/// Thread-safe in-memory store; contents are lost on drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<RwLock<HashMap<String, f64>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }
}

#[async_trait]
impl PlaybackStore for MemoryStore {
    async fn get_position(&self, sermon_id: &str, kind: MediaKind) -> Result<Option<f64>> {
        let values = self.values.read().await;
        Ok(values.get(&position_key(sermon_id, kind)).copied())
    }

    async fn set_position(&self, sermon_id: &str, kind: MediaKind, seconds: f64) -> Result<()> {
        check_position(seconds)?;
        let mut values = self.values.write().await;
        values.insert(position_key(sermon_id, kind), seconds);
        Ok(())
    }

    async fn clear_position(&self, sermon_id: &str, kind: MediaKind) -> Result<()> {
        let mut values = self.values.write().await;
        values.remove(&position_key(sermon_id, kind));
        Ok(())
    }

    async fn get_speed(&self, kind: MediaKind) -> Result<Option<f64>> {
        let values = self.values.read().await;
        Ok(values.get(&speed_key(kind)).copied())
    }

    async fn set_speed(&self, kind: MediaKind, speed: f64) -> Result<()> {
        check_speed(speed)?;
        let mut values = self.values.write().await;
        values.insert(speed_key(kind), speed);
        Ok(())
    }
}
