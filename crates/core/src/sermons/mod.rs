//! Sermon records from the hosting API and their display shape.

mod media;
mod record;
mod scripture;
mod types;

pub use media::{
    audio_options, video_options, MediaOption, AUDIO_HIGH_KBPS, VIDEO_1080P_KBPS, VIDEO_HIGH_KBPS,
};
pub use record::{MediaFile, MediaRecord, SeriesRecord, SermonPage, SermonRecord, SpeakerRecord};
pub use scripture::translate_scripture;
pub use types::{sort_newest_first, Sermon};
