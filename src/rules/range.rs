// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Range evaluation: one verdict per commit, one overall result.

use crate::commit::RawCommit;
use crate::config::Config;
use serde::Serialize;

use super::validator::{CommitValidator, CommitVerdict};

/// Verdicts for a whole range, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeReport {
    /// Whether every commit passed. True for an empty range.
    pub overall_passed: bool,
    /// One verdict per commit.
    pub verdicts: Vec<CommitVerdict>,
}

impl RangeReport {
    /// Number of commits that failed.
    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    /// Verdicts of commits that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CommitVerdict> {
        self.verdicts.iter().filter(|verdict| !verdict.passed)
    }

    /// Number of commits evaluated.
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    /// Whether the range was empty.
    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }
}

/// Evaluates ordered commit ranges.
#[derive(Debug, Default)]
pub struct RangeEvaluator {
    validator: CommitValidator,
}

impl RangeEvaluator {
    /// Create an evaluator around a commit validator.
    pub fn new(validator: CommitValidator) -> Self {
        Self { validator }
    }

    /// Validate every commit, keeping input order. Never aborts early.
    pub fn evaluate(&self, commits: &[RawCommit], config: &Config) -> RangeReport {
        let verdicts: Vec<CommitVerdict> = commits
            .iter()
            .map(|commit| self.validator.validate(commit, config))
            .collect();
        let overall_passed = verdicts.iter().all(|verdict| verdict.passed);

        tracing::debug!(
            commits = verdicts.len(),
            passed = overall_passed,
            "evaluated range"
        );

        RangeReport {
            overall_passed,
            verdicts,
        }
    }
}

/// Evaluate a range with the standard rules.
pub fn evaluate(commits: &[RawCommit], config: &Config) -> RangeReport {
    RangeEvaluator::default().evaluate(commits, config)
}
