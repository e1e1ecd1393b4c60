//! Playback memory: saved positions, last-used speeds, and player state.

mod error;
mod keys;
mod player;
mod traits;

pub use error::{Result, StoreError};
pub use keys::{position_key, speed_key, MediaKind};
pub use player::{PlayState, Player, RESUME_END_MARGIN_SECS, RESUME_MIN_SECS, SKIP_SECS};
pub use traits::{is_supported_speed, PlaybackStore, DEFAULT_SPEED, PLAYBACK_SPEEDS};
