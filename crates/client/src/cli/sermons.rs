//! Sermon CLI commands.

use clap::{Args, Parser, Subcommand};
use gracesite_core::category::CategoryFilter;

/// Sermon archive commands.
#[derive(Debug, Parser)]
pub struct SermonsCommand {
    #[command(subcommand)]
    pub action: SermonsAction,
}

/// Filters shared by the browse commands.
#[derive(Debug, Clone, Args)]
pub struct BrowseArgs {
    /// Case-insensitive search text.
    #[arg(long)]
    pub search: Option<String>,
    /// Category filter (`all` or a category slug such as `bible-study`).
    #[arg(long, default_value = "all")]
    pub category: CategoryFilter,
    /// Page number, starting at 1.
    #[arg(long, default_value = "1")]
    pub page: usize,
}

/// Available sermon actions.
#[derive(Debug, Subcommand)]
pub enum SermonsAction {
    /// List sermons, newest first.
    List(BrowseArgs),
    /// Show one sermon with its media options.
    Show {
        /// Sermon ID.
        id: String,
    },
}
