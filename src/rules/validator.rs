// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Per-commit validation and its result types.

use crate::commit::{short_id, ParsedMessage, RawCommit};
use crate::config::Config;
use serde::Serialize;

use super::engine::RuleSet;

/// A single failure of one rule against one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleViolation {
    /// Name of the rule that failed.
    pub rule: &'static str,
    /// Commit the violation belongs to.
    pub commit_id: String,
    /// Human-readable message.
    pub message: String,
    /// 1-based line number within the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// The offending line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Measured length, in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<usize>,
    /// Configured limit, in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// Optional suggestion for fixing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl RuleViolation {
    /// Create a violation for `rule`. The commit id is filled in later.
    pub fn new(rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            rule,
            commit_id: String::new(),
            message: message.into(),
            line: None,
            content: None,
            actual: None,
            limit: None,
            suggestion: None,
        }
    }

    /// Point at a body line.
    pub fn at_line(mut self, line: usize, content: impl Into<String>) -> Self {
        self.line = Some(line);
        self.content = Some(content.into());
        self
    }

    /// Record measured length and limit.
    pub fn with_lengths(mut self, actual: usize, limit: usize) -> Self {
        self.actual = Some(actual);
        self.limit = Some(limit);
        self
    }

    /// Set the suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach the violation to a commit.
    pub fn for_commit(mut self, commit_id: impl Into<String>) -> Self {
        self.commit_id = commit_id.into();
        self
    }
}

/// Result of validating one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitVerdict {
    /// Commit hash.
    pub commit_id: String,
    /// Parsed subject, for display.
    pub subject: String,
    /// Whether every rule passed.
    pub passed: bool,
    /// Violations in rule-invocation order.
    pub violations: Vec<RuleViolation>,
}

impl CommitVerdict {
    /// Abbreviated commit id for display.
    pub fn short_id(&self) -> &str {
        short_id(&self.commit_id)
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.passed {
            "Valid".to_string()
        } else {
            format!("Invalid ({} violations)", self.violations.len())
        }
    }
}

/// Runs a [`RuleSet`] against single commits.
#[derive(Debug, Default)]
pub struct CommitValidator {
    rules: RuleSet,
}

impl CommitValidator {
    /// Create a validator with the given rules.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// The rules this validator applies.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validate one commit. Malformed messages yield violations, never errors.
    pub fn validate(&self, commit: &RawCommit, config: &Config) -> CommitVerdict {
        let parsed = ParsedMessage::parse(&commit.message);
        let violations: Vec<RuleViolation> = self
            .rules
            .check(&parsed, config)
            .into_iter()
            .map(|violation| violation.for_commit(commit.id.as_str()))
            .collect();

        tracing::debug!(
            commit = %commit.short_id(),
            violations = violations.len(),
            "validated commit"
        );

        CommitVerdict {
            commit_id: commit.id.clone(),
            subject: parsed.subject,
            passed: violations.is_empty(),
            violations,
        }
    }
}

/// Validate one commit with the standard rules.
pub fn validate(commit: &RawCommit, config: &Config) -> CommitVerdict {
    CommitValidator::default().validate(commit, config)
}
