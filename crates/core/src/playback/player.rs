use serde::{Deserialize, Serialize};

use super::keys::MediaKind;
use super::traits::{is_supported_speed, DEFAULT_SPEED, PLAYBACK_SPEEDS};

/// Saved positions at or below this many seconds are not worth resuming.
pub const RESUME_MIN_SECS: f64 = 5.0;

/// Saved positions this close to the end start over instead.
pub const RESUME_END_MARGIN_SECS: f64 = 10.0;

/// Jump size for the skip buttons.
pub const SKIP_SECS: f64 = 15.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayState {
    #[default]
    Paused,
    Playing,
}

/// Play/pause state, position, and speed of one media player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub sermon_id: String,
    pub kind: MediaKind,
    pub state: PlayState,
    /// Seconds from the start.
    pub position: f64,
    /// Total length in seconds; 0 when unknown.
    pub duration: f64,
    pub speed: f64,
}

impl Player {
    /// Creates a paused player at the start.
    pub fn new(sermon_id: impl Into<String>, kind: MediaKind, duration: f64) -> Self {
        Self {
            sermon_id: sermon_id.into(),
            kind,
            state: PlayState::Paused,
            position: 0.0,
            duration: duration.max(0.0),
            speed: DEFAULT_SPEED,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Flips between playing and paused, returning the new state.
    pub fn toggle(&mut self) -> PlayState {
        self.state = match self.state {
            PlayState::Paused => PlayState::Playing,
            PlayState::Playing => PlayState::Paused,
        };
        self.state
    }

    pub fn pause(&mut self) {
        self.state = PlayState::Paused;
    }

    /// Moves to `seconds`, clamped to the media length when known.
    pub fn seek(&mut self, seconds: f64) {
        let seconds = if seconds.is_finite() { seconds } else { 0.0 };
        self.position = if self.duration > 0.0 {
            seconds.clamp(0.0, self.duration)
        } else {
            seconds.max(0.0)
        };
    }

    /// Skips forward (positive) or back (negative).
    pub fn skip(&mut self, delta: f64) {
        self.seek(self.position + delta);
    }

    /// Restores a saved position if it is meaningfully into the media.
    /// Returns true when the position was applied.
    pub fn resume_from(&mut self, saved: f64) -> bool {
        let near_end = self.duration > 0.0 && saved >= self.duration - RESUME_END_MARGIN_SECS;
        if saved > RESUME_MIN_SECS && !near_end {
            self.seek(saved);
            true
        } else {
            false
        }
    }

    /// Applies a saved speed; unsupported values are ignored.
    pub fn set_speed(&mut self, speed: f64) -> bool {
        if is_supported_speed(speed) {
            self.speed = speed;
            true
        } else {
            false
        }
    }

    /// Advances to the next supported speed, wrapping to the slowest.
    pub fn cycle_speed(&mut self) -> f64 {
        let next = PLAYBACK_SPEEDS
            .iter()
            .copied()
            .find(|s| *s > self.speed + f64::EPSILON)
            .unwrap_or(PLAYBACK_SPEEDS[0]);
        self.speed = next;
        next
    }

    /// True when playback reached the end of known-length media.
    pub fn is_finished(&self) -> bool {
        self.duration > 0.0 && self.position >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new("123", MediaKind::Audio, 2_520.0)
    }

    #[test]
    fn test_toggle_two_states() {
        let mut p = player();
        assert!(!p.is_playing());
        assert_eq!(p.toggle(), PlayState::Playing);
        assert_eq!(p.toggle(), PlayState::Paused);
        p.toggle();
        p.pause();
        assert_eq!(p.state, PlayState::Paused);
    }

    #[test]
    fn test_seek_and_skip_clamp() {
        let mut p = player();
        p.skip(-SKIP_SECS);
        assert_eq!(p.position, 0.0);

        p.seek(2_515.0);
        p.skip(SKIP_SECS);
        assert_eq!(p.position, 2_520.0);
        assert!(p.is_finished());

        p.seek(f64::NAN);
        assert_eq!(p.position, 0.0);
    }

    #[test]
    fn test_resume_from() {
        let mut p = player();
        assert!(!p.resume_from(3.0));
        assert_eq!(p.position, 0.0);

        assert!(!p.resume_from(2_515.0));
        assert_eq!(p.position, 0.0);

        assert!(p.resume_from(600.0));
        assert_eq!(p.position, 600.0);
    }

    #[test]
    fn test_resume_unknown_duration() {
        let mut p = Player::new("123", MediaKind::Video, 0.0);
        assert!(p.resume_from(90.0));
        assert_eq!(p.position, 90.0);
    }

    #[test]
    fn test_speed() {
        let mut p = player();
        assert!(!p.set_speed(3.0));
        assert_eq!(p.speed, 1.0);

        assert!(p.set_speed(1.75));
        assert_eq!(p.cycle_speed(), 2.0);
        assert_eq!(p.cycle_speed(), 0.5);
        assert_eq!(p.cycle_speed(), 0.75);
    }
}
