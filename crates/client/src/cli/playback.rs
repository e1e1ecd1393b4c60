//! Playback memory CLI commands.

use clap::{Parser, Subcommand};
use gracesite_core::playback::MediaKind;

/// Saved playback position and speed commands.
#[derive(Debug, Parser)]
pub struct PlaybackCommand {
    #[command(subcommand)]
    pub action: PlaybackAction,
}

/// Available playback actions.
#[derive(Debug, Subcommand)]
pub enum PlaybackAction {
    /// Show where playback would resume.
    Show {
        /// Sermon ID.
        sermon_id: String,
        /// Media kind (`audio` or `video`).
        #[arg(long, default_value = "audio")]
        media: MediaKind,
        /// Media length in seconds, when known.
        #[arg(long)]
        duration: Option<f64>,
    },
    /// Save a playback position.
    Save {
        /// Sermon ID.
        sermon_id: String,
        /// Position in seconds.
        seconds: f64,
        /// Media kind (`audio` or `video`).
        #[arg(long, default_value = "audio")]
        media: MediaKind,
    },
    /// Save the preferred playback speed.
    Speed {
        /// One of 0.5, 0.75, 1, 1.25, 1.5, 1.75, 2.
        speed: f64,
        /// Media kind (`audio` or `video`).
        #[arg(long, default_value = "audio")]
        media: MediaKind,
    },
    /// Forget a saved position.
    Clear {
        /// Sermon ID.
        sermon_id: String,
        /// Media kind (`audio` or `video`).
        #[arg(long, default_value = "audio")]
        media: MediaKind,
    },
}
