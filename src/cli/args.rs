//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run documentation checks and write the permission report
//! - `init`: Initialize the apicheck configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that load models.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Model file or directory to check (overrides `modelRoot`, repeatable)
    #[arg(long = "model", value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Permission report file (overrides `reportFile`)
    #[arg(long, value_name = "FILE")]
    pub report_file: Option<PathBuf>,

    /// Do not write the permission report
    #[arg(long)]
    pub no_report: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check API documentation and collect permission metadata
    Check(CheckCommand),
    /// Initialize a new .apicheckrc.json configuration file
    Init,
}
