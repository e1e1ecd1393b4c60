use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which player a stored value belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Audio,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "audio" => Ok(MediaKind::Audio),
            "video" => Ok(MediaKind::Video),
            other => Err(format!("unknown media kind: {other}")),
        }
    }
}

/// Returns the store key for a sermon's saved position.
pub fn position_key(sermon_id: &str, kind: MediaKind) -> String {
    format!("playback:{}:{}:position", sermon_id, kind)
}

/// Returns the store key for the last-used speed of a player kind.
pub fn speed_key(kind: MediaKind) -> String {
    format!("playback:{}:speed", kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_key() {
        assert_eq!(
            position_key("1230261234", MediaKind::Audio),
            "playback:1230261234:audio:position"
        );
        assert_ne!(
            position_key("1", MediaKind::Audio),
            position_key("1", MediaKind::Video)
        );
    }

    #[test]
    fn test_speed_key() {
        assert_eq!(speed_key(MediaKind::Video), "playback:video:speed");
    }

    #[test]
    fn test_media_kind_parse() {
        assert_eq!("Audio".parse::<MediaKind>(), Ok(MediaKind::Audio));
        assert_eq!("video".parse::<MediaKind>(), Ok(MediaKind::Video));
        assert!("podcast".parse::<MediaKind>().is_err());
    }
}
