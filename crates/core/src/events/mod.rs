mod error;
mod feed;
mod grid;
mod ical;
mod time;
mod types;

pub use error::EventError;
pub use feed::{sort_by_start, EventsFeed, EventsSection, OrganizationSection};
pub use grid::{group_by_date, DayCell, MonthGrid};
pub use ical::{
    escape_text, event_span, event_uid, google_calendar_url, ics_filename, to_ical,
    EVENT_DURATION_SECS,
};
pub use time::{event_start, parse_display_time};
pub use types::Event;
