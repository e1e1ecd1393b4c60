//! Pretty output formatting.

use std::fmt::Write;

use chrono::NaiveDate;
use gracesite_core::browse::{PageMarker, PageView};
use gracesite_core::events::{group_by_date, DayCell, Event, MonthGrid};
use gracesite_core::notify::{Toast, ToastVariant};
use gracesite_core::playback::{PlayState, Player};
use gracesite_core::sermons::{MediaOption, Sermon};
use gracesite_core::site::ORGANIZATION_ADDRESS;

use super::{NO_EVENTS, NO_MATCHES, NO_SERMONS};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn format_clock(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Format the page-number bar, bracketing the current page.
pub fn format_page_markers(markers: &[PageMarker], current: usize) -> String {
    markers
        .iter()
        .map(|marker| match marker {
            PageMarker::Page(page) if *page == current => format!("[{page}]"),
            PageMarker::Page(page) => page.to_string(),
            PageMarker::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_header<T>(output: &mut String, title: &str, view: &PageView<'_, T>, quiet: bool) {
    if !quiet {
        let _ = writeln!(output, "{title} ({} of {})", view.matched, view.available);
        output.push_str(&"-".repeat(40));
    }
}

fn push_footer<T>(output: &mut String, view: &PageView<'_, T>, quiet: bool) {
    if !quiet && view.total_pages > 1 {
        let _ = write!(
            output,
            "\nPage {} of {}  {}",
            view.page,
            view.total_pages,
            format_page_markers(&view.markers, view.page)
        );
    }
}

/// Format a sermon as a one-block summary.
pub fn format_sermon_summary(sermon: &Sermon) -> String {
    let mut output = format!("{}\n  ID: {}", sermon.title, sermon.id);
    if !sermon.speaker.is_empty() {
        let _ = write!(output, "\n  Speaker: {}", sermon.speaker);
    }
    if let Some(date) = sermon.date {
        let _ = write!(output, "\n  Date: {}", format_long_date(date));
    }
    if !sermon.scripture.is_empty() {
        let _ = write!(output, "\n  Scripture: {}", sermon.scripture);
    }
    if let Some(duration) = &sermon.duration {
        let _ = write!(output, "\n  Length: {duration}");
    }
    output
}

fn format_media_options(heading: &str, options: &[MediaOption]) -> String {
    let mut output = format!("\n  {heading}:");
    for option in options {
        let _ = write!(output, "\n    {}", option.label);
        if let Some(size) = &option.size {
            let _ = write!(output, " ({size})");
        }
        let _ = write!(output, "\n      {}", option.url);
    }
    output
}

/// Format a sermon with its media options.
pub fn format_sermon(sermon: &Sermon) -> String {
    let mut output = format_sermon_summary(sermon);
    if let Some(series) = &sermon.series {
        let _ = write!(output, "\n  Series: {series}");
    }
    if let Some(event_type) = &sermon.event_type {
        let _ = write!(output, "\n  Service: {event_type}");
    }
    let categories: Vec<&str> = sermon
        .categories()
        .as_slice()
        .iter()
        .map(|c| c.label())
        .collect();
    let _ = write!(output, "\n  Categories: {}", categories.join(", "));
    if let Some(description) = &sermon.description {
        let _ = write!(output, "\n  Description: {description}");
    }
    if !sermon.audio.is_empty() {
        output.push_str(&format_media_options("Audio", &sermon.audio));
    }
    if !sermon.video.is_empty() {
        output.push_str(&format_media_options("Video", &sermon.video));
    }
    let _ = write!(
        output,
        "\n  Comments: {}  Downloads: {}",
        sermon.comment_count, sermon.download_count
    );
    output
}

/// Format one page of the sermon browser.
///
/// `quiet` drops the count header and the page bar.
pub fn format_sermon_page(view: &PageView<'_, Sermon>, quiet: bool) -> String {
    if view.is_unavailable() {
        return NO_SERMONS.to_string();
    }
    if view.is_filtered_out() {
        return NO_MATCHES.to_string();
    }
    let mut output = String::new();
    push_header(&mut output, "SERMONS", view, quiet);
    for sermon in &view.items {
        let _ = write!(output, "\n{}\n", format_sermon_summary(sermon));
    }
    push_footer(&mut output, view, quiet);
    output.trim_start().to_string()
}

/// Format an event for display.
pub fn format_event(event: &Event) -> String {
    let mut output = match &event.time {
        Some(time) => format!("{time}  {}", event.name),
        None => event.name.clone(),
    };
    let _ = write!(
        output,
        "\n  Location: {}",
        event.location.as_deref().unwrap_or(ORGANIZATION_ADDRESS)
    );
    if !event.description.is_empty() {
        let _ = write!(output, "\n  {}", event.description);
    }
    output
}

/// Format one page of the events list, grouped by date.
pub fn format_event_page(view: &PageView<'_, Event>, quiet: bool) -> String {
    if view.is_unavailable() {
        return NO_EVENTS.to_string();
    }
    if view.is_filtered_out() {
        return NO_MATCHES.to_string();
    }
    let mut output = String::new();
    push_header(&mut output, "EVENTS", view, quiet);
    for (date, events) in group_by_date(view.items.iter().copied()) {
        let _ = write!(output, "\n{}\n", format_long_date(date));
        for event in events {
            for line in format_event(event).lines() {
                let _ = writeln!(output, "  {line}");
            }
        }
    }
    push_footer(&mut output, view, quiet);
    output.trim_start().to_string()
}

fn month_title(grid: &MonthGrid) -> String {
    let name = MONTH_NAMES
        .get(grid.month0 as usize)
        .copied()
        .unwrap_or_default();
    format!("{name} {}", grid.year)
}

/// Format a month as a Sunday-first grid. Days with events are starred and,
/// unless `quiet`, listed below the grid.
pub fn format_month_grid(grid: &MonthGrid, quiet: bool) -> String {
    let mut output = format!("{:^28}\n", month_title(grid));
    output.push_str(" Su  Mo  Tu  We  Th  Fr  Sa\n");
    for week in grid.weeks() {
        for cell in week {
            match cell {
                Some(day) if day.is_selectable() => {
                    let _ = write!(output, "{:>3}*", day.day());
                }
                Some(day) => {
                    let _ = write!(output, "{:>3} ", day.day());
                }
                None => output.push_str("    "),
            }
        }
        output.truncate(output.trim_end().len());
        output.push('\n');
    }

    let busy: Vec<&DayCell> = grid.days().filter(|day| day.is_selectable()).collect();
    if !quiet && !busy.is_empty() {
        output.push('\n');
        for day in busy {
            let names: Vec<&str> = day.events.iter().map(|e| e.name.as_str()).collect();
            let _ = writeln!(output, "{:>3}  {}", day.day(), names.join(", "));
        }
    }
    output.truncate(output.trim_end().len());
    output
}

/// Format the detail view of one day.
pub fn format_day(day: &DayCell) -> String {
    let mut output = format_long_date(day.date);
    for event in &day.events {
        let _ = write!(output, "\n{}", format_event(event));
    }
    output
}

/// Format saved playback state for a sermon.
pub fn format_playback(player: &Player, resumed: bool) -> String {
    let state = match player.state {
        PlayState::Playing => "playing",
        PlayState::Paused => "paused",
    };
    let mut output = format!("Sermon {} ({})", player.sermon_id, player.kind);
    if resumed {
        let _ = write!(output, "\n  Resume at: {}", format_clock(player.position));
    } else {
        output.push_str("\n  Starts from the beginning");
    }
    if player.duration > 0.0 {
        let _ = write!(output, "\n  Length: {}", format_clock(player.duration));
    }
    let _ = write!(output, "\n  Speed: {}x\n  State: {state}", player.speed);
    output
}

/// Format a toast as a single line.
pub fn format_toast(toast: &Toast) -> String {
    let marker = match toast.variant {
        ToastVariant::Default => "*",
        ToastVariant::Destructive => "!",
    };
    match (&toast.title, &toast.description) {
        (Some(title), Some(description)) => format!("{marker} {title}: {description}"),
        (Some(title), None) => format!("{marker} {title}"),
        (None, Some(description)) => format!("{marker} {description}"),
        (None, None) => marker.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gracesite_core::browse::{BrowseState, EVENTS_PER_PAGE};
    use gracesite_core::category::{Category, CategoryFilter};
    use gracesite_core::playback::MediaKind;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn events() -> Vec<Event> {
        vec![
            Event::new("Prayer & Bible Study", make_date(2026, 1, 28)).with_time("7:00 PM"),
            Event::new("Sunday Worship", make_date(2026, 2, 1))
                .with_time("10:30 AM")
                .with_location("Main Sanctuary"),
            Event::new("Youth Night", make_date(2026, 2, 1)).with_time("6:00 PM"),
        ]
    }

    #[test]
    fn test_event_page_empty_states() {
        let state = BrowseState::new(EVENTS_PER_PAGE);
        let none: Vec<Event> = Vec::new();
        assert_eq!(format_event_page(&state.view(&none), false), NO_EVENTS);

        let mut state = BrowseState::new(EVENTS_PER_PAGE);
        state.set_category(CategoryFilter::Only(Category::Outreach));
        let events = events();
        assert_eq!(format_event_page(&state.view(&events), false), NO_MATCHES);
    }

    #[test]
    fn test_event_page_groups_by_date() {
        let state = BrowseState::new(EVENTS_PER_PAGE);
        let events = events();
        let output = format_event_page(&state.view(&events), false);

        assert!(output.starts_with("EVENTS (3 of 3)"));
        assert_eq!(output.matches("Sunday, February 1, 2026").count(), 1);
        assert!(output.contains("10:30 AM  Sunday Worship"));
        assert!(output.contains("Location: Main Sanctuary"));
        assert!(output.contains(ORGANIZATION_ADDRESS));
    }

    #[test]
    fn test_month_grid_marks_busy_days() {
        let events = events();
        let grid = MonthGrid::build(2026, 0, &events).unwrap();
        let output = format_month_grid(&grid, false);

        assert!(output.contains("January 2026"));
        assert!(output.contains(" 28*"));
        assert!(output.contains(" 27 "));
        assert!(output.ends_with("28  Prayer & Bible Study"));

        let quiet = format_month_grid(&grid, true);
        assert!(!quiet.contains("Prayer & Bible Study"));
        assert!(quiet.contains(" 28*"));
    }

    #[test]
    fn test_quiet_event_page_drops_header() {
        let state = BrowseState::new(EVENTS_PER_PAGE);
        let events = events();
        let output = format_event_page(&state.view(&events), true);

        assert!(!output.contains("EVENTS ("));
        assert!(output.starts_with("Wednesday, January 28, 2026"));
        assert!(output.contains("7:00 PM  Prayer & Bible Study"));

        let none: Vec<Event> = Vec::new();
        assert_eq!(format_event_page(&state.view(&none), true), NO_EVENTS);
    }

    #[test]
    fn test_page_markers() {
        let markers = vec![
            PageMarker::Page(1),
            PageMarker::Ellipsis,
            PageMarker::Page(4),
            PageMarker::Page(5),
            PageMarker::Page(6),
            PageMarker::Ellipsis,
            PageMarker::Page(10),
        ];
        assert_eq!(format_page_markers(&markers, 5), "1 ... 4 [5] 6 ... 10");
    }

    #[test]
    fn test_format_playback() {
        let mut player = Player::new("123", MediaKind::Audio, 2_520.0);
        let resumed = player.resume_from(754.0);
        player.set_speed(1.25);

        let output = format_playback(&player, resumed);
        assert!(output.contains("Sermon 123 (audio)"));
        assert!(output.contains("Resume at: 12:34"));
        assert!(output.contains("Length: 42:00"));
        assert!(output.contains("Speed: 1.25x"));
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "0:00");
        assert_eq!(format_clock(65.9), "1:05");
        assert_eq!(format_clock(3_725.0), "1:02:05");
    }

    #[test]
    fn test_format_toast() {
        let toast = Toast {
            id: 1,
            title: Some("Message sent".to_string()),
            description: Some("We'll be in touch soon.".to_string()),
            variant: ToastVariant::Default,
            open: true,
        };
        assert_eq!(format_toast(&toast), "* Message sent: We'll be in touch soon.");
    }
}
