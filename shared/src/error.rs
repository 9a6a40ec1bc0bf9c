//! Error types for the Power Grid skill.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that fail a whole skill invocation.
#[derive(Error, Debug)]
pub enum Error {
    /// Intent name outside the supported set
    #[error("Invalid intent: {0}")]
    InvalidIntent(String),

    /// Sector table error
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors returned by a sector table gateway.
///
/// The display form is the bare message so handlers can speak it back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The store rejected or failed the request
    #[error("{0}")]
    Service(String),

    /// A stored item could not be decoded into a sector record
    #[error("Malformed sector record: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_displays_raw_message() {
        let err = TableError::Service("timeout".to_string());
        assert_eq!(err.to_string(), "timeout");
    }

    #[test]
    fn test_invalid_intent_message_names_intent() {
        let err = Error::InvalidIntent("Weather".to_string());
        assert_eq!(err.to_string(), "Invalid intent: Weather");
    }

    #[test]
    fn test_table_error_converts() {
        let err: Error = TableError::Malformed("missing ID".to_string()).into();
        assert_eq!(err.to_string(), "Table error: Malformed sector record: missing ID");
    }
}
