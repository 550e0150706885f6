// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rendering of range reports.
//!
//! Output goes to any [`Write`] so the CLI can print to stdout and tests can
//! capture it.

mod github;

pub use github::{escape_data, write_github, write_step_summary, STEP_SUMMARY_ENV};

use crate::cli::args::OutputFormat;
use crate::rules::{CommitVerdict, RangeReport, RuleViolation};
use console::style;
use std::io::{self, Write};

/// Render a report in the requested format.
pub fn render<W: Write>(
    report: &RangeReport,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(report, out),
        OutputFormat::Json => write_json(report, out),
        OutputFormat::Github => write_github(report, out),
    }
}

/// Render a report to stdout.
pub fn print(report: &RangeReport, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(report, format, &mut out)?;
    out.flush()
}

/// Plain text, one block per commit and a closing summary line.
pub fn write_text<W: Write>(report: &RangeReport, out: &mut W) -> io::Result<()> {
    for verdict in &report.verdicts {
        write_verdict_text(verdict, out)?;
    }

    let total = report.len();
    let failed = report.failed_count();
    if report.overall_passed {
        writeln!(
            out,
            "{} {} commit(s) checked, all passed",
            style("✓").green().bold(),
            total
        )
    } else {
        writeln!(
            out,
            "{} {} commit(s) checked, {} failed",
            style("✗").red().bold(),
            total,
            failed
        )
    }
}

fn write_verdict_text<W: Write>(verdict: &CommitVerdict, out: &mut W) -> io::Result<()> {
    let status = if verdict.passed {
        style("✓").green().bold()
    } else {
        style("✗").red().bold()
    };
    writeln!(
        out,
        "{} {} {}",
        status,
        style(verdict.short_id()).cyan(),
        verdict.subject
    )?;

    for violation in &verdict.violations {
        writeln!(out, "  {}", format_violation(violation))?;
    }

    Ok(())
}

/// Format a violation for terminal output.
pub fn format_violation(violation: &RuleViolation) -> String {
    let mut output = format!(
        "{} {} {}",
        style("✗").red().bold(),
        style(violation.rule).red(),
        violation.message
    );

    if let Some(ref content) = violation.content {
        output.push_str(&format!("\n    {} {}", style("|").dim(), content));
    }

    if let Some(ref suggestion) = violation.suggestion {
        output.push_str(&format!(
            "\n    {} {}",
            style("→").dim(),
            style(suggestion).dim()
        ));
    }

    output
}

/// The serialized report, pretty-printed.
pub fn write_json<W: Write>(report: &RangeReport, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::RawCommit;
    use crate::config::Config;
    use crate::rules::evaluate;

    fn sample_report() -> RangeReport {
        let commits = vec![
            RawCommit::new("abc1234567", "Valid subject\n\nBody line."),
            RawCommit::new("bad9999999", format!("Subject\n\n{}", "w".repeat(80))),
        ];
        evaluate(&commits, &Config::default())
    }

    fn render_to_string(report: &RangeReport, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        render(report, format, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_output() {
        let text = render_to_string(&sample_report(), OutputFormat::Text);
        assert!(text.contains("abc1234"));
        assert!(text.contains("Valid subject"));
        assert!(text.contains("bad9999"));
        assert!(text.contains("body line 1 exceeds 72 characters (80 characters)"));
        assert!(text.contains("2 commit(s) checked, 1 failed"));
    }

    #[test]
    fn test_text_output_empty_range() {
        let report = evaluate(&[], &Config::default());
        let text = render_to_string(&report, OutputFormat::Text);
        assert!(text.contains("0 commit(s) checked, all passed"));
    }

    #[test]
    fn test_json_output() {
        let json = render_to_string(&sample_report(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["overall_passed"], false);
        assert_eq!(value["verdicts"][0]["passed"], true);
        let violation = &value["verdicts"][1]["violations"][0];
        assert_eq!(violation["rule"], "body-line-wrap");
        assert_eq!(violation["commit_id"], "bad9999999");
        assert_eq!(violation["line"], 1);
        assert_eq!(violation["actual"], 80);
        assert_eq!(violation["limit"], 72);
    }

    #[test]
    fn test_format_violation_includes_suggestion() {
        let violation = RuleViolation::new("body-presence", "missing body")
            .with_suggestion("Add a body");
        let formatted = format_violation(&violation);
        assert!(formatted.contains("body-presence"));
        assert!(formatted.contains("missing body"));
        assert!(formatted.contains("Add a body"));
    }
}
