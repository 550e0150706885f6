// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! GitHub Actions workflow-command output.

use crate::rules::{RangeReport, RuleViolation};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Environment variable naming the job summary file.
pub const STEP_SUMMARY_ENV: &str = "GITHUB_STEP_SUMMARY";

/// Escape a workflow-command message.
pub fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// One collapsible group of `::error::` lines per failing commit.
pub fn write_github<W: Write>(report: &RangeReport, out: &mut W) -> io::Result<()> {
    for verdict in &report.verdicts {
        if verdict.passed {
            writeln!(out, "✓ Commit {} passed all checks.", verdict.commit_id)?;
            continue;
        }

        writeln!(out, "::group::✗ Errors in commit {}", verdict.commit_id)?;
        for violation in &verdict.violations {
            writeln!(
                out,
                "::error title={}::{}",
                violation.rule,
                escape_data(&annotation_text(violation))
            )?;
        }
        writeln!(out, "::endgroup::")?;
    }

    Ok(())
}

fn annotation_text(violation: &RuleViolation) -> String {
    match violation.content {
        Some(ref content) => format!("{}: {}", violation.message, content),
        None => violation.message.clone(),
    }
}

/// Append the markdown run summary to `path`.
pub fn write_step_summary(report: &RangeReport, path: &Path) -> io::Result<()> {
    tracing::debug!("Writing step summary to {:?}", path);

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "### Commit Validation Summary")?;

    let failed = report.failed_count();
    if failed > 0 {
        writeln!(file, "- ❌ {} commit(s) failed validation.", failed)
    } else {
        writeln!(file, "- ✅ All commits passed validation.")
    }
}
