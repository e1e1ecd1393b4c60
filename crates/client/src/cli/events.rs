//! Event CLI commands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gracesite_core::category::CategoryFilter;

use super::sermons::BrowseArgs;

/// Event commands.
#[derive(Debug, Parser)]
pub struct EventsCommand {
    #[command(subcommand)]
    pub action: EventsAction,
}

/// Available event actions.
#[derive(Debug, Subcommand)]
pub enum EventsAction {
    /// List upcoming events grouped by date.
    List(BrowseArgs),
    /// Show a month calendar.
    Calendar {
        /// Year (defaults to the current year).
        #[arg(long)]
        year: Option<i32>,
        /// Month, 1-12 (defaults to the current month).
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Show the events of one day.
        #[arg(long)]
        day: Option<u32>,
    },
    /// Export events as an iCalendar file.
    Export {
        /// Case-insensitive search text.
        #[arg(long)]
        search: Option<String>,
        /// Category filter.
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
        /// Output file (defaults to a name derived from the events).
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print a Google Calendar link for an event.
    GoogleLink {
        /// Position of the event in the sorted list, starting at 1.
        index: usize,
    },
}
