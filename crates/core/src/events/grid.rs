use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::EventError;
use super::types::Event;

/// A single day in the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Events on this day, ordered by time of day.
    pub events: Vec<Event>,
}

impl DayCell {
    /// Returns the day of the month.
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Only days with events open the detail view.
    pub fn is_selectable(&self) -> bool {
        !self.events.is_empty()
    }
}

/// A month laid out Sunday-first: leading placeholders, then one cell per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    /// Zero-based month (January = 0).
    pub month0: u32,
    pub cells: Vec<Option<DayCell>>,
}

impl MonthGrid {
    /// Builds the grid for `year`/`month0`, bucketing `events` by day.
    ///
    /// Events outside the month are ignored. Within a day, events are sorted
    /// by start time; ties keep their input order.
    pub fn build(year: i32, month0: u32, events: &[Event]) -> Result<Self, EventError> {
        if month0 > 11 {
            return Err(EventError::InvalidMonth(month0));
        }
        let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)
            .ok_or(EventError::InvalidYear(year))?;

        let mut by_day: BTreeMap<u32, Vec<Event>> = BTreeMap::new();
        for event in events {
            if event.date.year() == year && event.date.month0() == month0 {
                by_day.entry(event.date.day()).or_default().push(event.clone());
            }
        }

        let leading = first.weekday().num_days_from_sunday() as usize;
        let days = days_in_month(first);
        let mut cells: Vec<Option<DayCell>> = Vec::with_capacity(leading + days as usize);
        cells.resize(leading, None);

        for (offset, date) in first.iter_days().take(days as usize).enumerate() {
            let mut day_events = by_day.remove(&(offset as u32 + 1)).unwrap_or_default();
            day_events.sort_by_key(Event::starts_at);
            cells.push(Some(DayCell {
                date,
                events: day_events,
            }));
        }

        Ok(Self {
            year,
            month0,
            cells,
        })
    }

    /// Number of placeholder cells before day 1.
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_none()).count()
    }

    /// Returns the cell for `day` if it has events; inert days yield `None`.
    pub fn select(&self, day: u32) -> Option<&DayCell> {
        self.days()
            .find(|cell| cell.day() == day)
            .filter(|cell| cell.is_selectable())
    }

    /// Iterates over the day cells, skipping placeholders.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().flatten()
    }

    /// Splits cells into rows of seven; the last row may be shorter.
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<DayCell>]> {
        self.cells.chunks(7)
    }

    /// The `(year, month0)` before this one.
    pub fn previous(&self) -> (i32, u32) {
        if self.month0 == 0 {
            (self.year - 1, 11)
        } else {
            (self.year, self.month0 - 1)
        }
    }

    /// The `(year, month0)` after this one.
    pub fn next(&self) -> (i32, u32) {
        if self.month0 == 11 {
            (self.year + 1, 0)
        } else {
            (self.year, self.month0 + 1)
        }
    }
}

fn days_in_month(first: NaiveDate) -> u32 {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Groups an ordered event list into consecutive per-date runs.
pub fn group_by_date<'a, I>(events: I) -> Vec<(NaiveDate, Vec<&'a Event>)>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut groups: Vec<(NaiveDate, Vec<&'a Event>)> = Vec::new();
    for event in events {
        match groups.last_mut() {
            Some((date, bucket)) if *date == event.date => bucket.push(event),
            _ => groups.push((event.date, vec![event])),
        }
    }
    groups
}
