//! The static organization feed the events pages are built from.

use serde::{Deserialize, Serialize};

use super::error::EventError;
use super::types::Event;

/// Top-level document: `{ organization: { events: { upcoming: [...] } } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsFeed {
    #[serde(default)]
    pub organization: OrganizationSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSection {
    #[serde(default)]
    pub events: EventsSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsSection {
    #[serde(default)]
    pub upcoming: Vec<Event>,
}

impl EventsFeed {
    /// Parses a feed document.
    pub fn from_json(json: &str) -> Result<Self, EventError> {
        serde_json::from_str(json).map_err(|e| EventError::InvalidFeed(e.to_string()))
    }

    /// Consumes the feed, returning its events ordered by start date-time.
    /// Events sharing a start keep their feed order.
    pub fn into_events(self) -> Vec<Event> {
        let mut events = self.organization.events.upcoming;
        sort_by_start(&mut events);
        events
    }
}

/// Sorts events ascending by start date-time (stable).
pub fn sort_by_start(events: &mut [Event]) {
    events.sort_by_key(Event::starts_at);
}
