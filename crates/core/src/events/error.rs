use thiserror::Error;

/// Errors that can occur when building event views.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Invalid month index: {0} (expected 0-11)")]
    InvalidMonth(u32),
    #[error("Invalid year: {0}")]
    InvalidYear(i32),
    #[error("Invalid events feed: {0}")]
    InvalidFeed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_error_display() {
        assert_eq!(
            EventError::InvalidMonth(12).to_string(),
            "Invalid month index: 12 (expected 0-11)"
        );
        assert_eq!(
            EventError::InvalidFeed("missing name".to_string()).to_string(),
            "Invalid events feed: missing name"
        );
    }
}
