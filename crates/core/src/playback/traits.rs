use async_trait::async_trait;

use super::keys::MediaKind;
use super::Result;

/// Supported playback speeds, slowest first.
pub const PLAYBACK_SPEEDS: [f64; 7] = [0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];

/// Speed used when nothing has been saved.
pub const DEFAULT_SPEED: f64 = 1.0;

/// Returns true if `speed` is one of [`PLAYBACK_SPEEDS`].
pub fn is_supported_speed(speed: f64) -> bool {
    PLAYBACK_SPEEDS.iter().any(|s| (s - speed).abs() < f64::EPSILON)
}

/// Browser-style local key-value storage for playback memory.
///
/// Keys are independent and writes are last-write-wins.
#[async_trait]
pub trait PlaybackStore: Send + Sync {
    /// Gets the saved position (seconds) for a sermon.
    async fn get_position(&self, sermon_id: &str, kind: MediaKind) -> Result<Option<f64>>;

    /// Saves the position (seconds) for a sermon.
    async fn set_position(&self, sermon_id: &str, kind: MediaKind, seconds: f64) -> Result<()>;

    /// Forgets the saved position for a sermon.
    async fn clear_position(&self, sermon_id: &str, kind: MediaKind) -> Result<()>;

    /// Gets the last-used speed for a player kind.
    async fn get_speed(&self, kind: MediaKind) -> Result<Option<f64>>;

    /// Saves the last-used speed for a player kind.
    async fn set_speed(&self, kind: MediaKind, speed: f64) -> Result<()>;
}
