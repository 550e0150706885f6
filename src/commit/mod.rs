// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit inputs and message structure.
//!
//! This module provides the raw commit record handed over by the git
//! collaborator and the parser that splits its message into parts.

mod message;

pub use message::ParsedMessage;

use serde::Serialize;

/// A commit as fetched from version control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawCommit {
    /// Commit hash.
    pub id: String,
    /// Full, unprocessed commit message.
    pub message: String,
}

impl RawCommit {
    /// Create a new raw commit.
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Abbreviated commit id for display.
    pub fn short_id(&self) -> &str {
        short_id(&self.id)
    }
}

/// Line written by `git commit --verbose` above the diff.
pub const SCISSORS_LINE: &str = "# ------------------------ >8 ------------------------";

/// Drop `#` comment lines the way git's default message cleanup does.
///
/// Everything below the [`SCISSORS_LINE`] is discarded as well.
pub fn strip_comments(message: &str) -> String {
    let mut kept = Vec::new();

    for line in message.lines() {
        if line.trim_end() == SCISSORS_LINE {
            break;
        }
        if !line.starts_with('#') {
            kept.push(line);
        }
    }

    kept.join("\n")
}

/// Shorten a commit hash to seven characters.
pub fn short_id(id: &str) -> &str {
    id.char_indices().nth(7).map_or(id, |(idx, _)| &id[..idx])
}
