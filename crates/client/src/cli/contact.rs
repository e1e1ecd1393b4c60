//! Contact form CLI command.

use clap::Parser;

/// Sends a message to the church office.
#[derive(Debug, Parser)]
pub struct ContactCommand {
    /// Your name.
    #[arg(long)]
    pub name: String,
    /// Reply-to email address.
    #[arg(long)]
    pub email: String,
    /// Optional phone number.
    #[arg(long)]
    pub phone: Option<String>,
    /// Optional subject line.
    #[arg(long)]
    pub subject: Option<String>,
    /// Message body.
    #[arg(long)]
    pub message: String,
}
