//! Client error types.

use gracesite_core::contact::ContactError;
use gracesite_core::events::EventError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Contact form rejected: {0}")]
    Contact(#[from] ContactError),

    #[error(transparent)]
    Event(#[from] EventError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_display() {
        let error = ClientError::ServerError {
            status: 422,
            message: "email is required".to_string(),
        };
        assert_eq!(error.to_string(), "Server returned 422: email is required");

        let error: ClientError = ContactError::EmptyMessage.into();
        assert_eq!(error.to_string(), "Contact form rejected: Message cannot be empty");
    }

    #[test]
    fn test_event_error_is_transparent() {
        let error: ClientError = EventError::InvalidMonth(12).into();
        assert_eq!(error.to_string(), EventError::InvalidMonth(12).to_string());
    }
}
