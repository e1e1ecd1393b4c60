use serde::{Deserialize, Serialize};

use crate::format::format_bytes;

use super::record::MediaFile;

/// Audio at or above this bitrate (kbps) is labelled high quality.
pub const AUDIO_HIGH_KBPS: u32 = 96;
/// Video at or above this bitrate (kbps) is labelled 1080p.
pub const VIDEO_1080P_KBPS: u32 = 4000;
/// Video at or above this bitrate (kbps) is labelled high.
pub const VIDEO_HIGH_KBPS: u32 = 1000;

/// A playable or downloadable rendition of a sermon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaOption {
    pub label: String,
    pub url: String,
    /// Kilobits per second, 0 when unknown.
    pub bitrate: u32,
    /// Human-readable file size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

fn audio_label(bitrate: u32) -> &'static str {
    if bitrate >= AUDIO_HIGH_KBPS {
        "High Quality"
    } else {
        "Low Quality"
    }
}

fn video_label(bitrate: u32) -> &'static str {
    if bitrate >= VIDEO_1080P_KBPS {
        "1080p"
    } else if bitrate >= VIDEO_HIGH_KBPS {
        "High"
    } else {
        "Low"
    }
}

fn to_option(file: &MediaFile, label: fn(u32) -> &'static str) -> Option<MediaOption> {
    let url = file.download_url.clone().or_else(|| file.stream_url.clone())?;
    let bitrate = file.bitrate.unwrap_or(0);
    Some(MediaOption {
        label: label(bitrate).to_string(),
        url,
        bitrate,
        size: file.file_size_bytes.map(format_bytes),
    })
}

/// Audio options in feed order. Files without a URL are dropped.
pub fn audio_options(files: &[MediaFile]) -> Vec<MediaOption> {
    files
        .iter()
        .filter_map(|file| to_option(file, audio_label))
        .collect()
}

/// Video options, highest bitrate first. Files without a URL are dropped.
pub fn video_options(files: &[MediaFile]) -> Vec<MediaOption> {
    let mut options: Vec<MediaOption> = files
        .iter()
        .filter_map(|file| to_option(file, video_label))
        .collect();
    options.sort_by(|a, b| b.bitrate.cmp(&a.bitrate));
    options
}
