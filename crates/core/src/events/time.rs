use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Parses a display time such as `7:00 PM` or `10:30am`.
///
/// Hour must be 1-12 and minutes two digits. 12 AM is midnight and 12 PM is
/// noon. Returns `None` for anything else.
pub fn parse_display_time(input: &str) -> Option<NaiveTime> {
    let s = input.trim();
    if s.len() < 2 || !s.is_char_boundary(s.len() - 2) {
        return None;
    }

    let (clock, meridiem) = s.split_at(s.len() - 2);
    let is_pm = if meridiem.eq_ignore_ascii_case("pm") {
        true
    } else if meridiem.eq_ignore_ascii_case("am") {
        false
    } else {
        return None;
    };

    let (hour, minute) = clock.trim_end().split_once(':')?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return None;
    }
    if !hour.chars().chain(minute.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Combines an event date with its optional display time.
///
/// Missing or malformed times leave the result at midnight.
pub fn event_start(date: NaiveDate, time: Option<&str>) -> NaiveDateTime {
    let time = time
        .and_then(parse_display_time)
        .unwrap_or(NaiveTime::MIN);
    date.and_time(time)
}
