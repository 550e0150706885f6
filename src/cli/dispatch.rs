// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::commit::{strip_comments, RawCommit};
use crate::config::{load_config, load_config_from, merge_rules, Config};
use crate::error::{MsgCheckError, Result, ResultExt};
use crate::report::{self, STEP_SUMMARY_ENV};
use crate::rules::{RangeEvaluator, RangeReport};
use std::io::Read;
use std::path::Path;

use super::args::{Cli, Commands, InitArgs, LimitArgs, MsgArgs, RangeArgs};

/// Name of the file written by `init`.
const CONFIG_FILE_NAME: &str = "msgcheck.toml";

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command.clone() {
        Commands::Range(args) => run_range(&cli, args),
        Commands::Msg(args) => run_msg(&cli, args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Load the file configuration, layer the command-line limits and validate.
fn resolve_config(cli: &Cli, limits: &LimitArgs) -> Result<Config> {
    let file = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    let config = merge_rules(file.rules, limits.to_rules()).resolve()?;
    tracing::debug!("Resolved configuration: {:?}", config);
    Ok(config)
}

/// Run the range command.
fn run_range(cli: &Cli, args: RangeArgs) -> Result<()> {
    tracing::debug!("Running range command with args: {:?}", args);

    // Refuse to run on a bad configuration before touching the repository.
    let config = resolve_config(cli, &args.limits)?;

    let commits = crate::git::fetch_range(
        args.repo.as_deref(),
        args.base.as_deref(),
        &args.head,
        args.include_merges,
    )?;

    let report = RangeEvaluator::default().evaluate(&commits, &config);
    finish(cli, &report)
}

/// Run the msg command.
fn run_msg(cli: &Cli, args: MsgArgs) -> Result<()> {
    tracing::debug!("Running msg command with args: {:?}", args);

    let config = resolve_config(cli, &args.limits)?;

    let (label, raw) = if args.is_stdin() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        ("stdin".to_string(), buf)
    } else {
        let content = std::fs::read_to_string(&args.file)
            .context(format!("Failed to read {}", args.file.display()))?;
        (args.file.display().to_string(), content)
    };

    let commit = RawCommit::new(label, strip_comments(&raw));
    let report = RangeEvaluator::default().evaluate(std::slice::from_ref(&commit), &config);
    finish(cli, &report)
}

/// Print the report, write the step summary and map the verdict to a result.
fn finish(cli: &Cli, report: &RangeReport) -> Result<()> {
    let format = cli.format.unwrap_or_default();
    report::print(report, format)?;

    if let Some(path) = std::env::var_os(STEP_SUMMARY_ENV).filter(|p| !p.is_empty()) {
        report::write_step_summary(report, Path::new(&path))
            .context("Failed to write step summary")?;
    }

    if report.overall_passed {
        Ok(())
    } else {
        Err(MsgCheckError::ValidationFailed {
            failed: report.failed_count(),
            total: report.len(),
        })
    }
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("msgcheck {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(describe) = crate::version::GIT_DESCRIBE {
        println!("git describe: {}", describe);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        return Err(MsgCheckError::WithContext {
            context: "init".to_string(),
            message: format!(
                "{} already exists. Use --force to overwrite.",
                CONFIG_FILE_NAME
            ),
        });
    }

    std::fs::write(config_path, example_config()).context("Failed to write configuration")?;

    println!("✓ Created {}", CONFIG_FILE_NAME);

    Ok(())
}
