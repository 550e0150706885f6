// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! msgcheck - commit message structure checks
//!
//! Validates the structure of every commit message in a base..head range
//! before it is merged.
//!
//! # Features
//!
//! - **Message Parser**: splits a message into subject, body and trailers
//! - **Rule Set**: subject presence and length, body presence and wrapping,
//!   blank-line separation
//! - **Range Evaluation**: one verdict per commit, in order, with an overall
//!   pass/fail
//! - **CI Output**: text, JSON and GitHub Actions annotations
//!
//! # Example
//!
//! ```
//! use msgcheck::commit::RawCommit;
//! use msgcheck::config::Config;
//! use msgcheck::rules::evaluate;
//!
//! let config = Config::new(50, 72, true).unwrap();
//! let commits = vec![
//!     RawCommit::new("a1", "Add parser\n\nSplit messages into parts.\n\nSigned-off-by: A <a@x>"),
//!     RawCommit::new("b2", "Fix it"),
//! ];
//!
//! let report = evaluate(&commits, &config);
//! assert!(!report.overall_passed);
//! assert!(report.verdicts[0].passed);
//! assert_eq!(report.verdicts[1].violations[0].message, "missing body");
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod report;
pub mod rules;

// Re-exports for convenience
pub use commit::{ParsedMessage, RawCommit};
pub use config::Config;
pub use error::{MsgCheckError, Result};
pub use rules::{evaluate, validate, CommitVerdict, RangeReport, RuleViolation};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of msgcheck.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// `git describe` output at compile time (if available).
    pub const GIT_DESCRIBE: Option<&str> = option_env!("VERGEN_GIT_DESCRIBE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, crate::commit::short_id(sha), date)
            }
            (Some(sha), None) => format!("{} ({})", VERSION, crate::commit::short_id(sha)),
            _ => VERSION.to_string(),
        }
    }
}
