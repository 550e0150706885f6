// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for msgcheck.
//!
//! Only failures to *run* are errors. A malformed commit message is never an
//! error: it becomes a [`RuleViolation`](crate::rules::RuleViolation) in the
//! report.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for msgcheck operations.
#[derive(Error, Debug)]
pub enum MsgCheckError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // One or more commits in the range did not pass
    #[error("{failed} of {total} commit(s) failed validation")]
    ValidationFailed { failed: usize, total: usize },

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Result type alias for msgcheck operations.
pub type Result<T> = std::result::Result<T, MsgCheckError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| MsgCheckError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/msgcheck.toml"),
        };
        assert!(err.to_string().contains("/path/to/msgcheck.toml"));
    }

    #[test]
    fn test_invalid_value_names_key() {
        let err = ConfigError::InvalidValue {
            key: "subject_char_limit".to_string(),
            message: "must be a positive integer, got 0".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("subject_char_limit"));
        assert!(text.contains("got 0"));
    }

    #[test]
    fn test_error_from_config_error() {
        let config_err = ConfigError::ParseError {
            message: "expected an integer for body_char_limit".to_string(),
        };
        let err: MsgCheckError = config_err.into();
        assert!(matches!(err, MsgCheckError::Config(_)));
        assert!(err.to_string().contains("body_char_limit"));
    }

    #[test]
    fn test_validation_failed_display() {
        let err = MsgCheckError::ValidationFailed { failed: 2, total: 5 };
        assert_eq!(err.to_string(), "2 of 5 commit(s) failed validation");
    }

    #[test]
    fn test_git_error_from_git2() {
        let err = GitError::from(git2::Error::from_str("corrupt index"));
        assert!(matches!(err, GitError::OpenFailed { .. }));
        assert_eq!(err.to_string(), "Failed to open repository: corrupt index");
    }

    #[test]
    fn test_result_ext_context() {
        let io: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"));
        let err = io.context("summary").unwrap_err();
        assert_eq!(err.to_string(), "summary: disk gone");
    }
}
