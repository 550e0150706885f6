// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.
//!
//! Every rule is a pure function of the parsed message and the
//! configuration. Rules never see the commit id; the validator stamps it on
//! the violations afterwards.

use crate::commit::ParsedMessage;
use crate::config::Config;

use super::validator::RuleViolation;

/// A single structural check.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Check the message and return every violation found.
    fn check(&self, message: &ParsedMessage, config: &Config) -> Vec<RuleViolation>;

    /// Get the rule name.
    fn name(&self) -> &'static str;
}

/// Length of a line in characters (Unicode scalar values, not bytes).
pub fn char_count(line: &str) -> usize {
    line.chars().count()
}

/// The message must have a subject.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectPresence;

impl Rule for SubjectPresence {
    fn check(&self, message: &ParsedMessage, _config: &Config) -> Vec<RuleViolation> {
        if message.has_subject() {
            return Vec::new();
        }

        vec![RuleViolation::new(self.name(), "missing subject")
            .with_suggestion("Start the message with a one-line summary of the change")]
    }

    fn name(&self) -> &'static str {
        "subject-presence"
    }
}

/// The subject must fit within the subject limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectLength;

impl Rule for SubjectLength {
    fn check(&self, message: &ParsedMessage, config: &Config) -> Vec<RuleViolation> {
        let limit = config.subject_char_limit();
        let len = char_count(&message.subject);

        if len <= limit {
            return Vec::new();
        }

        vec![RuleViolation::new(
            self.name(),
            format!("subject exceeds {} characters ({} characters)", limit, len),
        )
        .with_lengths(len, limit)
        .with_suggestion(format!(
            "Shorten the subject to {} characters or less",
            limit
        ))]
    }

    fn name(&self) -> &'static str {
        "subject-length"
    }
}

/// The message must explain itself in a body.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyPresence;

impl Rule for BodyPresence {
    fn check(&self, message: &ParsedMessage, _config: &Config) -> Vec<RuleViolation> {
        if message.has_body() {
            return Vec::new();
        }

        vec![RuleViolation::new(self.name(), "missing body")
            .with_suggestion("Add a body describing what changed and why")]
    }

    fn name(&self) -> &'static str {
        "body-presence"
    }
}

/// Every body line must fit within the body limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyLineWrap;

impl Rule for BodyLineWrap {
    fn check(&self, message: &ParsedMessage, config: &Config) -> Vec<RuleViolation> {
        let limit = config.body_char_limit();

        message
            .body
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                let len = char_count(line);
                if len <= limit {
                    return None;
                }

                let line_no = idx + 1;
                Some(
                    RuleViolation::new(
                        self.name(),
                        format!(
                            "body line {} exceeds {} characters ({} characters)",
                            line_no, limit, len
                        ),
                    )
                    .at_line(line_no, line.as_str())
                    .with_lengths(len, limit)
                    .with_suggestion(format!("Wrap body lines at {} characters", limit)),
                )
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "body-line-wrap"
    }
}

/// Subject, body and trailers must be separated by blank lines.
///
/// Does nothing unless `check_blank_line` is enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankLineSeparation;

impl Rule for BlankLineSeparation {
    fn check(&self, message: &ParsedMessage, config: &Config) -> Vec<RuleViolation> {
        let mut violations = Vec::new();

        if !config.check_blank_line() || !message.has_body() {
            return violations;
        }

        if !message.blank_after_subject {
            violations.push(
                RuleViolation::new(self.name(), "missing blank line after subject")
                    .with_suggestion("Insert an empty line between the subject and the body"),
            );
        }

        if message.has_trailers() && !message.blank_before_trailers {
            violations.push(
                RuleViolation::new(self.name(), "missing blank line before trailers")
                    .with_suggestion("Insert an empty line between the body and the trailers"),
            );
        }

        violations
    }

    fn name(&self) -> &'static str {
        "blank-line-separation"
    }
}
