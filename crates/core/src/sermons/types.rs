use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::browse::Searchable;
use crate::category::{classify, Categories};
use crate::format::format_duration;
use crate::serde::parse_feed_date;

use super::media::{audio_options, video_options, MediaOption};
use super::record::SermonRecord;
use super::scripture::translate_scripture;

/// A sermon shaped for the sermon browser and player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sermon {
    pub id: String,
    pub title: String,
    pub speaker: String,
    /// `None` when the feed date could not be parsed.
    pub date: Option<NaiveDate>,
    /// Scripture reference with English book names.
    pub scripture: String,
    pub series: Option<String>,
    pub event_type: Option<String>,
    pub description: Option<String>,
    /// Formatted running time, e.g. `"42 min"`.
    pub duration: Option<String>,
    /// Raw running time in seconds, used by the player.
    pub duration_seconds: Option<u64>,
    pub audio: Vec<MediaOption>,
    pub video: Vec<MediaOption>,
    pub comment_count: u64,
    pub download_count: u64,
}

impl Sermon {
    /// Maps an API record into the display shape.
    pub fn from_record(record: &SermonRecord) -> Self {
        let duration_seconds = record
            .media
            .audio
            .iter()
            .chain(record.media.video.iter())
            .find_map(|file| file.duration)
            .filter(|secs| *secs > 0);

        let description = record
            .subtitle
            .clone()
            .or_else(|| record.more_info_text.clone());

        Self {
            id: record.sermon_id.clone(),
            title: record.display_title.clone(),
            speaker: record
                .speaker
                .as_ref()
                .map(|s| s.display_name.clone())
                .unwrap_or_default(),
            date: parse_feed_date(&record.preach_date),
            scripture: record
                .bible_text
                .as_deref()
                .map(translate_scripture)
                .unwrap_or_default(),
            series: record
                .series
                .as_ref()
                .map(|s| s.title.clone())
                .filter(|t| !t.trim().is_empty()),
            event_type: record.event_type.clone(),
            description,
            duration: duration_seconds.map(format_duration),
            duration_seconds,
            audio: audio_options(&record.media.audio),
            video: video_options(&record.media.video),
            comment_count: record.comment_count,
            download_count: record.download_count,
        }
    }

    /// Maps a batch of records, preserving order.
    pub fn from_records(records: &[SermonRecord]) -> Vec<Self> {
        records.iter().map(Self::from_record).collect()
    }

    /// Category tags derived from the event type and title.
    pub fn categories(&self) -> Categories {
        let text = match &self.event_type {
            Some(event_type) => format!("{event_type} {}", self.title),
            None => self.title.clone(),
        };
        classify(&text)
    }

    pub fn has_audio(&self) -> bool {
        !self.audio.is_empty()
    }

    pub fn has_video(&self) -> bool {
        !self.video.is_empty()
    }
}

impl Searchable for Sermon {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.speaker.as_str(),
            self.scripture.as_str(),
        ];
        fields.extend(self.description.as_deref());
        fields.extend(self.series.as_deref());
        fields
    }

    fn categories(&self) -> Categories {
        Sermon::categories(self)
    }
}

/// Newest sermons first; undated sermons last.
pub fn sort_newest_first(sermons: &mut [Sermon]) {
    sermons.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::filter_by_query;
    use crate::category::Category;
    use crate::sermons::record::{MediaFile, MediaRecord, SeriesRecord, SpeakerRecord};

    fn record(id: &str, title: &str) -> SermonRecord {
        SermonRecord {
            sermon_id: id.to_string(),
            display_title: title.to_string(),
            full_title: None,
            subtitle: None,
            more_info_text: None,
            preach_date: "2026-01-25".to_string(),
            speaker: Some(SpeakerRecord {
                display_name: "Pastor Miguel Torres".to_string(),
            }),
            bible_text: Some("Lucas 10:25-37".to_string()),
            event_type: Some("Sunday - AM".to_string()),
            series: Some(SeriesRecord {
                title: "Parables of Jesus".to_string(),
            }),
            media: MediaRecord {
                audio: vec![MediaFile {
                    bitrate: Some(128),
                    duration: Some(2_520),
                    file_size_bytes: Some(40_370_176),
                    download_url: Some("https://media.example/a.mp3".to_string()),
                    ..MediaFile::default()
                }],
                video: Vec::new(),
            },
            comment_count: 3,
            download_count: 41,
        }
    }

    #[test]
    fn test_from_record() {
        let sermon = Sermon::from_record(&record("123", "The Good Samaritan"));

        assert_eq!(sermon.id, "123");
        assert_eq!(sermon.speaker, "Pastor Miguel Torres");
        assert_eq!(sermon.scripture, "Luke 10:25-37");
        assert_eq!(sermon.date, NaiveDate::from_ymd_opt(2026, 1, 25));
        assert_eq!(sermon.series.as_deref(), Some("Parables of Jesus"));
        assert_eq!(sermon.duration.as_deref(), Some("42 min"));
        assert_eq!(sermon.audio[0].label, "High Quality");
        assert_eq!(sermon.audio[0].size.as_deref(), Some("38.5 MB"));
        assert!(sermon.has_audio());
        assert!(!sermon.has_video());
        assert_eq!(sermon.download_count, 41);
    }

    #[test]
    fn test_from_record_missing_optionals() {
        let mut raw = record("9", "Untitled");
        raw.speaker = None;
        raw.bible_text = None;
        raw.series = Some(SeriesRecord::default());
        raw.media = MediaRecord::default();
        raw.preach_date = "soon".to_string();

        let sermon = Sermon::from_record(&raw);
        assert_eq!(sermon.speaker, "");
        assert_eq!(sermon.scripture, "");
        assert_eq!(sermon.series, None);
        assert_eq!(sermon.duration, None);
        assert_eq!(sermon.date, None);
    }

    #[test]
    fn test_sermon_categories_use_event_type() {
        let sermon = Sermon::from_record(&record("1", "The Good Samaritan"));
        assert_eq!(sermon.categories().as_slice(), &[Category::Sunday]);

        let mut raw = record("2", "Wednesday Bible Study: Romans");
        raw.event_type = None;
        let sermon = Sermon::from_record(&raw);
        assert!(sermon.categories().contains(Category::Wednesday));
        assert!(sermon.categories().contains(Category::BibleStudy));
    }

    #[test]
    fn test_sermon_search_fields() {
        let sermons = Sermon::from_records(&[
            record("1", "The Good Samaritan"),
            record("2", "Faith Over Fear"),
        ]);

        assert_eq!(filter_by_query(&sermons, "samaritan").len(), 1);
        assert_eq!(filter_by_query(&sermons, "luke 10").len(), 2);
        assert_eq!(filter_by_query(&sermons, "parables").len(), 2);
        assert_eq!(filter_by_query(&sermons, "torres").len(), 2);
    }

    #[test]
    fn test_sort_newest_first() {
        let mut older = record("1", "Older");
        older.preach_date = "2025-12-07".to_string();
        let mut undated = record("2", "Undated");
        undated.preach_date = String::new();
        let mut sermons = Sermon::from_records(&[older, undated, record("3", "Newer")]);

        sort_newest_first(&mut sermons);
        let ids: Vec<&str> = sermons.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}
