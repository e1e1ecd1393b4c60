//! Events feed operations.

use gracesite_core::events::{Event, EventsFeed};

use super::GraceClient;
use crate::error::Result;

/// Parses the organization feed into events ordered by start.
pub fn parse_events_feed(body: &str) -> Result<Vec<Event>> {
    Ok(EventsFeed::from_json(body)?.into_events())
}

impl GraceClient {
    /// Fetch the upcoming events.
    pub async fn fetch_events(&self) -> Result<Vec<Event>> {
        let body = self.get_text(&self.config.events_url).await?;
        let events = parse_events_feed(&body)?;
        tracing::debug!(count = events.len(), "loaded events");
        Ok(events)
    }

    /// Fetch events; any failure degrades to an empty list.
    pub async fn fetch_events_or_empty(&self) -> Vec<Event> {
        match self.fetch_events().await {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load events");
                Vec::new()
            }
        }
    }
}
