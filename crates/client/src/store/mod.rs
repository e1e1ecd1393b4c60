//! Local key-value stores backing playback memory.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use gracesite_core::playback::{is_supported_speed, StoreError};

/// Rejects positions that cannot be stored.
fn check_position(seconds: f64) -> Result<(), StoreError> {
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(())
    } else {
        Err(StoreError::InvalidPosition(seconds))
    }
}

/// Rejects speeds the player does not offer.
fn check_speed(speed: f64) -> Result<(), StoreError> {
    if is_supported_speed(speed) {
        Ok(())
    } else {
        Err(StoreError::InvalidSpeed(speed))
    }
}
