//! Raw records from the sermon-hosting API.

use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_null_default, deserialize_optional_string};

/// One page of the sermon listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SermonPage {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub results: Vec<SermonRecord>,
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub next: Option<String>,
}

/// A sermon as returned by the hosting API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SermonRecord {
    #[serde(rename = "sermonID")]
    pub sermon_id: String,
    pub display_title: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub full_title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub more_info_text: Option<String>,
    /// `YYYY-MM-DD` or a full timestamp.
    pub preach_date: String,
    #[serde(default)]
    pub speaker: Option<SpeakerRecord>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub bible_text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub event_type: Option<String>,
    #[serde(default)]
    pub series: Option<SeriesRecord>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub media: MediaRecord,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub comment_count: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub download_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerRecord {
    #[serde(default)]
    pub display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesRecord {
    #[serde(default)]
    pub title: String,
}

/// Media attachments grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub audio: Vec<MediaFile>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub video: Vec<MediaFile>,
}

/// A single encoded media file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub media_type: Option<String>,
    /// Kilobits per second.
    #[serde(default)]
    pub bitrate: Option<u32>,
    #[serde(default)]
    pub file_size_bytes: Option<u64>,
    /// Seconds.
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(
        default,
        rename = "downloadURL",
        deserialize_with = "deserialize_optional_string"
    )]
    pub download_url: Option<String>,
    #[serde(
        default,
        rename = "streamURL",
        deserialize_with = "deserialize_optional_string"
    )]
    pub stream_url: Option<String>,
}
