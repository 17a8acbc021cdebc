//! Error types for betsim.

use thiserror::Error;

/// Every failure a user action can produce. None of them are fatal: callers
/// show the message and wait for the next action.
#[derive(Debug, Error)]
pub enum BetsimError {
    #[error("{message}")]
    InvalidDistribution { message: String },

    #[error("Please select a graph to append to.")]
    NoGraphSelected,

    #[error("Graph file {name}.json not found.")]
    GraphNotFound { name: String },

    #[error("A graph named '{name}' already exists.")]
    DuplicateName { name: String },

    #[error("{reason}")]
    InvalidName { reason: String },

    #[error("{field} must be {expected}, got '{value}'")]
    InvalidInput {
        field: String,
        expected: &'static str,
        value: String,
    },

    #[error("Graph file {name}.json is corrupted: {reason}")]
    Corrupt { name: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BetsimError {
    pub fn invalid_input(field: &str, expected: &'static str, value: &str) -> Self {
        BetsimError::InvalidInput {
            field: field.to_string(),
            expected,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BetsimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_file() {
        let err = BetsimError::GraphNotFound {
            name: "daily".to_string(),
        };
        assert_eq!(err.to_string(), "Graph file daily.json not found.");
    }

    #[test]
    fn test_invalid_input_message() {
        let err = BetsimError::invalid_input("Wager", "a whole number", "5.5");
        assert_eq!(err.to_string(), "Wager must be a whole number, got '5.5'");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: BetsimError = io.into();
        assert!(matches!(err, BetsimError::Io(_)));
    }
}
