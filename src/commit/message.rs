// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// A `Key: value` trailer line such as `Signed-off-by: Name <email>`.
    static ref TRAILER_REGEX: Regex = Regex::new(r"^[A-Za-z-]+:\s.+$").unwrap();
}

/// A commit message split into its structural parts.
///
/// Parsing never fails. Whatever is missing (subject, body, separators) is
/// left empty or `false` here and reported by the rules instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedMessage {
    /// First line with visible content, or empty.
    pub subject: String,
    /// Lines between the subject and the trailer block.
    pub body: Vec<String>,
    /// Final `Key: value` block, including folded continuation lines.
    pub trailers: Vec<String>,
    /// A blank line directly follows the subject.
    pub blank_after_subject: bool,
    /// A blank line directly precedes the trailer block.
    pub blank_before_trailers: bool,
}

impl ParsedMessage {
    /// Parse a raw commit message.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
        let lines: Vec<&str> = normalized.split('\n').map(str::trim_end).collect();

        let Some(subject_idx) = lines.iter().position(|line| !line.is_empty()) else {
            return Self::default();
        };
        let subject = lines[subject_idx].to_string();

        // Everything after the subject, minus blank lines at the very end.
        let rest = trim_trailing_blank(&lines[subject_idx + 1..]);

        let trailer_start = trailer_block_start(rest);
        let trailers = to_owned_lines(&rest[trailer_start..]);
        let blank_before_trailers =
            !trailers.is_empty() && trailer_start > 0 && rest[trailer_start - 1].is_empty();

        let mut body = &rest[..trailer_start];
        let blank_after_subject = match body.split_first() {
            Some((first, tail)) if first.is_empty() => {
                body = tail;
                true
            }
            _ => false,
        };
        let body = to_owned_lines(trim_trailing_blank(body));

        Self {
            subject,
            body,
            trailers,
            blank_after_subject,
            blank_before_trailers,
        }
    }

    /// Whether the message has a subject.
    pub fn has_subject(&self) -> bool {
        !self.subject.is_empty()
    }

    /// Whether the message has a body.
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    /// Whether the message ends in a trailer block.
    pub fn has_trailers(&self) -> bool {
        !self.trailers.is_empty()
    }
}

/// Check whether a line has the `Key: value` trailer shape.
pub fn is_trailer(line: &str) -> bool {
    TRAILER_REGEX.is_match(line)
}

/// Folded trailer value: an indented, non-blank line.
fn is_continuation(line: &str) -> bool {
    line.starts_with(char::is_whitespace) && !line.trim().is_empty()
}

/// Index where the trailer block starts, or `lines.len()` if there is none.
///
/// The block is the longest run at the end made of trailer and continuation
/// lines whose first line is a trailer.
fn trailer_block_start(lines: &[&str]) -> usize {
    let mut start = lines.len();

    for (idx, line) in lines.iter().enumerate().rev() {
        if is_trailer(line) {
            start = idx;
        } else if !is_continuation(line) {
            break;
        }
    }

    start
}

fn trim_trailing_blank<'a>(lines: &'a [&'a str]) -> &'a [&'a str] {
    let end = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(0, |idx| idx + 1);
    &lines[..end]
}

fn to_owned_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}
