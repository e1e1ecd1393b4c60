use thiserror::Error;

/// Errors that can occur when validating a contact form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Name too long (max 100 characters)")]
    NameTooLong,
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    #[error("Message cannot be empty")]
    EmptyMessage,
    #[error("Message too long (max 5000 characters)")]
    MessageTooLong,
}
