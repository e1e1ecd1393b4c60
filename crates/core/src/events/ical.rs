//! "Add to calendar" exports: iCalendar text and Google Calendar links.
//!
//! The feed carries no end times, so every event is exported as one hour
//! long. UIDs are derived from the start time and name and can collide for
//! same-named events at the same time.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use url::Url;

use crate::site::{
    ICAL_PRODID, ICAL_UID_DOMAIN, ORGANIZATION_ADDRESS, ORGANIZATION_NAME, TIMEZONE,
};

use super::types::Event;

/// Fixed length of every exported event, in seconds.
pub const EVENT_DURATION_SECS: i64 = 3600;

const GOOGLE_CALENDAR_URL: &str = "https://calendar.google.com/calendar/render";
const ICAL_DATETIME: &str = "%Y%m%dT%H%M%S";
const MAX_LINE_OCTETS: usize = 75;

/// Escapes a TEXT value: backslash, semicolon, comma, and newlines.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Start and end of an exported event.
pub fn event_span(event: &Event) -> (NaiveDateTime, NaiveDateTime) {
    let start = event.starts_at();
    (start, start + Duration::seconds(EVENT_DURATION_SECS))
}

/// UID for an event: start stamp, whitespace-free name, fixed domain.
pub fn event_uid(event: &Event) -> String {
    let name: String = event.name.chars().filter(|c| !c.is_whitespace()).collect();
    format!(
        "{}-{}@{}",
        event.starts_at().format(ICAL_DATETIME),
        name,
        ICAL_UID_DOMAIN
    )
}

fn event_location(event: &Event) -> &str {
    event.location.as_deref().unwrap_or(ORGANIZATION_ADDRESS)
}

/// Serializes events into a single VCALENDAR document.
///
/// `generated_at` is written as every event's `DTSTAMP`.
pub fn to_ical(events: &[Event], generated_at: DateTime<Utc>) -> String {
    let stamp = generated_at.format("%Y%m%dT%H%M%SZ").to_string();
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{ICAL_PRODID}"),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        format!("X-WR-CALNAME:{}", escape_text(ORGANIZATION_NAME)),
        format!("X-WR-TIMEZONE:{TIMEZONE}"),
    ];

    for event in events {
        let (start, end) = event_span(event);
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:{}", event_uid(event)));
        lines.push(format!("DTSTAMP:{stamp}"));
        lines.push(format!(
            "DTSTART;TZID={TIMEZONE}:{}",
            start.format(ICAL_DATETIME)
        ));
        lines.push(format!("DTEND;TZID={TIMEZONE}:{}", end.format(ICAL_DATETIME)));
        lines.push(format!("SUMMARY:{}", escape_text(&event.name)));
        if !event.description.is_empty() {
            lines.push(format!("DESCRIPTION:{}", escape_text(&event.description)));
        }
        lines.push(format!("LOCATION:{}", escape_text(event_location(event))));
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());

    let mut out = String::new();
    for line in &lines {
        out.push_str(&fold_line(line));
        out.push_str("\r\n");
    }
    out
}

/// Folds a content line into 75-octet chunks joined by CRLF + space.
fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut width = 0;
    // Continuation lines start with a space, which counts toward the limit.
    let mut limit = MAX_LINE_OCTETS;
    for c in line.chars() {
        let len = c.len_utf8();
        if width + len > limit {
            out.push_str("\r\n ");
            width = 0;
            limit = MAX_LINE_OCTETS - 1;
        }
        out.push(c);
        width += len;
    }
    out
}

/// Builds a Google Calendar "create event" link for one event.
pub fn google_calendar_url(event: &Event) -> String {
    let (start, end) = event_span(event);
    let dates = format!(
        "{}/{}",
        start.format(ICAL_DATETIME),
        end.format(ICAL_DATETIME)
    );

    Url::parse_with_params(
        GOOGLE_CALENDAR_URL,
        &[
            ("action", "TEMPLATE"),
            ("text", event.name.as_str()),
            ("dates", dates.as_str()),
            ("details", event.description.as_str()),
            ("location", event_location(event)),
            ("ctz", TIMEZONE),
        ],
    )
    .map(String::from)
    .unwrap_or_else(|_| GOOGLE_CALENDAR_URL.to_string())
}

/// File name for a downloaded export.
pub fn ics_filename(events: &[Event]) -> String {
    match events {
        [event] => {
            let slug = slugify(&event.name);
            if slug.is_empty() {
                "event.ics".to_string()
            } else {
                format!("{slug}.ics")
            }
        }
        _ => "gracesite-events.ics".to_string(),
    }
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
