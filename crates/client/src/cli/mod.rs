//! CLI command definitions.

pub mod contact;
pub mod events;
pub mod playback;
pub mod sermons;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Browse sermons and events for Grace Community Church.
#[derive(Debug, Parser)]
#[command(name = "gracesite")]
#[command(about = "Browse sermons and events for Grace Community Church", long_about = None)]
pub struct Cli {
    /// Sermon listing endpoint.
    #[arg(long, global = true, env = "GRACESITE_SERMONS_URL")]
    pub sermons_url: Option<String>,

    /// Organization feed with upcoming events.
    #[arg(long, global = true, env = "GRACESITE_EVENTS_URL")]
    pub events_url: Option<String>,

    /// Contact form endpoint.
    #[arg(long, global = true, env = "GRACESITE_CONTACT_URL")]
    pub contact_url: Option<String>,

    /// Playback store file.
    #[arg(long, global = true, env = "GRACESITE_STORE_PATH")]
    pub store_path: Option<PathBuf>,

    /// HTTP timeout in seconds.
    #[arg(long, global = true, env = "GRACESITE_HTTP_TIMEOUT_SECS")]
    pub http_timeout_secs: Option<u64>,

    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse the sermon archive.
    Sermons(sermons::SermonsCommand),
    /// Browse upcoming events.
    Events(events::EventsCommand),
    /// Send a message through the contact form.
    Contact(contact::ContactCommand),
    /// Saved playback positions and speeds.
    Playback(playback::PlaybackCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use gracesite_core::category::{Category, CategoryFilter};

    #[test]
    fn test_parse_sermons_list() {
        let cli = Cli::try_parse_from([
            "gracesite",
            "--format",
            "json",
            "sermons",
            "list",
            "--search",
            "grace",
            "--category",
            "youth",
            "--page",
            "2",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        let Commands::Sermons(cmd) = cli.command else {
            panic!("expected sermons command");
        };
        let sermons::SermonsAction::List(args) = cmd.action else {
            panic!("expected list action");
        };
        assert_eq!(args.search.as_deref(), Some("grace"));
        assert_eq!(args.category, CategoryFilter::Only(Category::Youth));
        assert_eq!(args.page, 2);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gracesite",
            "events",
            "list",
            "--events-url",
            "http://localhost:8080/organization.json",
            "--quiet",
        ])
        .unwrap();

        assert!(cli.quiet);
        assert_eq!(
            cli.events_url.as_deref(),
            Some("http://localhost:8080/organization.json")
        );
    }

    #[test]
    fn test_http_timeout_flag() {
        let cli = Cli::try_parse_from([
            "gracesite",
            "--http-timeout-secs",
            "3",
            "sermons",
            "list",
        ])
        .unwrap();
        assert_eq!(cli.http_timeout_secs, Some(3));
    }

    #[test]
    fn test_rejects_unknown_category() {
        let result = Cli::try_parse_from(["gracesite", "events", "list", "--category", "choir"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_calendar_month_range() {
        let result =
            Cli::try_parse_from(["gracesite", "events", "calendar", "--month", "13"]);
        assert!(result.is_err());

        let cli =
            Cli::try_parse_from(["gracesite", "events", "calendar", "--month", "12"]).unwrap();
        let Commands::Events(cmd) = cli.command else {
            panic!("expected events command");
        };
        assert!(matches!(
            cmd.action,
            events::EventsAction::Calendar { month: Some(12), .. }
        ));
    }
}
