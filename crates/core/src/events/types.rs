use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::category::{classify, Categories};
use crate::serde::{deserialize_feed_date, deserialize_optional_string};

use super::time::event_start;

/// An organization event as published in the static events feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(deserialize_with = "deserialize_feed_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    /// Display time in `h:mm AM/PM` form.
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
}

impl Event {
    /// Creates an event with no time, description, or location.
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
            description: String::new(),
            time: None,
            location: None,
        }
    }

    /// Sets the display time (`h:mm AM/PM`).
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the location for this event.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Category tags derived from the event name.
    pub fn categories(&self) -> Categories {
        classify(&self.name)
    }

    /// Local start date-time; midnight when the time is missing or malformed.
    pub fn starts_at(&self) -> NaiveDateTime {
        event_start(self.date, self.time.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use chrono::NaiveTime;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_event_builder() {
        let event = Event::new("Sunday Worship", make_date(2026, 2, 1))
            .with_time("10:30 AM")
            .with_description("Morning service")
            .with_location("Main Sanctuary");

        assert_eq!(event.name, "Sunday Worship");
        assert_eq!(event.time.as_deref(), Some("10:30 AM"));
        assert_eq!(event.description, "Morning service");
        assert_eq!(event.location.as_deref(), Some("Main Sanctuary"));
        assert_eq!(event.categories().as_slice(), &[Category::Sunday]);
    }

    #[test]
    fn test_event_starts_at() {
        let event = Event::new("Prayer & Bible Study", make_date(2026, 1, 28)).with_time("7:00 PM");
        assert_eq!(
            event.starts_at(),
            make_date(2026, 1, 28).and_time(NaiveTime::from_hms_opt(19, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_event_deserialize_from_feed() {
        let json = r#"{
            "name": "Church Potluck",
            "date": "2026-03-15",
            "description": "Bring a dish to share",
            "time": "",
            "location": "Fellowship Hall"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.date, make_date(2026, 3, 15));
        assert_eq!(event.time, None);
        assert_eq!(event.location.as_deref(), Some("Fellowship Hall"));
    }

    #[test]
    fn test_event_deserialize_minimal() {
        let json = r#"{"name": "Easter", "date": "2026-04-05T00:00:00"}"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.description, "");
        assert_eq!(event.time, None);
        assert_eq!(event.location, None);
    }
}
