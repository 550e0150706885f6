// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use crate::config::RulesConfig;
use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// msgcheck - commit message structure checks
///
/// Validates subject length, body wrapping and blank-line separation for
/// every commit in a range.
#[derive(Parser, Debug)]
#[command(name = "msgcheck")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Validate commit message structure across a commit range", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format
    #[arg(long, global = true, value_enum, env = "MSGCHECK_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON output for machine parsing
    Json,
    /// GitHub Actions workflow commands
    Github,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate every commit in base..head
    Range(RangeArgs),

    /// Validate a single commit message file (or - for stdin)
    Msg(MsgArgs),

    /// Write an example msgcheck.toml
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Limit overrides shared by the checking commands.
#[derive(Args, Debug, Default, Clone)]
pub struct LimitArgs {
    /// Maximum subject length in characters
    #[arg(
        long = "sub-limit",
        env = "MSGCHECK_SUB_LIMIT",
        value_name = "CHARS",
        allow_negative_numbers = true
    )]
    pub sub_limit: Option<i64>,

    /// Maximum body line length in characters
    #[arg(
        long = "body-limit",
        env = "MSGCHECK_BODY_LIMIT",
        value_name = "CHARS",
        allow_negative_numbers = true
    )]
    pub body_limit: Option<i64>,

    /// Require blank lines after the subject and before trailers
    #[arg(
        long,
        env = "MSGCHECK_CHECK_BLANK_LINE",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub check_blank_line: Option<bool>,
}

impl LimitArgs {
    /// The overrides as a rules table to layer over the file configuration.
    pub fn to_rules(&self) -> RulesConfig {
        RulesConfig {
            subject_char_limit: self.sub_limit,
            body_char_limit: self.body_limit,
            check_blank_line: self.check_blank_line,
        }
    }
}

/// Arguments for the range command.
#[derive(Parser, Debug, Clone)]
pub struct RangeArgs {
    /// Base of the range (excluded). Without it only the head commit is
    /// checked, not the history reachable from it
    #[arg(long)]
    pub base: Option<String>,

    /// Head of the range (included)
    #[arg(long, default_value = "HEAD")]
    pub head: String,

    /// Check merge commits too
    #[arg(long)]
    pub include_merges: bool,

    /// Repository to read (default: current directory)
    #[arg(long, value_name = "PATH")]
    pub repo: Option<PathBuf>,

    #[command(flatten)]
    pub limits: LimitArgs,
}

/// Arguments for the msg command.
#[derive(Parser, Debug, Clone)]
pub struct MsgArgs {
    /// Message file, such as .git/COMMIT_EDITMSG
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub limits: LimitArgs,
}

impl MsgArgs {
    /// Whether the message is read from stdin.
    pub fn is_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}
