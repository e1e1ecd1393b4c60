//! gracesite_client - feed client, local playback store, and CLI for gracesite.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod store;

pub use client::GraceClient;
pub use config::Config;
pub use error::{ClientError, Result};
