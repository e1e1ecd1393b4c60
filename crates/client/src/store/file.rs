//! JSON-file playback store.
//!
//! The whole file is one flat object of `key -> number`. Every write is a
//! read-modify-write of that object, serialized within the process.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use gracesite_core::playback::{
    position_key, speed_key, MediaKind, PlaybackStore, Result, StoreError,
};

use super::{check_position, check_speed};

type Values = BTreeMap<String, f64>;

/// Playback store persisted to a JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Values> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Values::new()),
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StoreError::Serialization(e.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Values::new()),
            Err(e) => Err(StoreError::Io(e.to_string())),
        }
    }

    async fn save(&self, values: &Values) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Io(e.to_string()))?;
        }
        let json = serde_json::to_vec_pretty(values)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))
    }

    async fn get(&self, key: &str) -> Result<Option<f64>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.get(key).copied())
    }

    async fn update<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Values) + Send,
    {
        let _guard = self.lock.lock().await;
        let mut values = self.load().await?;
        apply(&mut values);
        self.save(&values).await?;
        tracing::debug!(path = %self.path.display(), "playback store written");
        Ok(())
    }
}

#[async_trait]
impl PlaybackStore for FileStore {
    async fn get_position(&self, sermon_id: &str, kind: MediaKind) -> Result<Option<f64>> {
        self.get(&position_key(sermon_id, kind)).await
    }

    async fn set_position(&self, sermon_id: &str, kind: MediaKind, seconds: f64) -> Result<()> {
        check_position(seconds)?;
        let key = position_key(sermon_id, kind);
        self.update(move |values| {
            values.insert(key, seconds);
        })
        .await
    }

    async fn clear_position(&self, sermon_id: &str, kind: MediaKind) -> Result<()> {
        let key = position_key(sermon_id, kind);
        self.update(move |values| {
            values.remove(&key);
        })
        .await
    }

    async fn get_speed(&self, kind: MediaKind) -> Result<Option<f64>> {
        self.get(&speed_key(kind)).await
    }

    async fn set_speed(&self, kind: MediaKind, speed: f64) -> Result<()> {
        check_speed(speed)?;
        let key = speed_key(kind);
        self.update(move |values| {
            values.insert(key, speed);
        })
        .await
    }
}
