use std::path::PathBuf;

use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug, Default)]
pub struct CheckSummary {
    /// Set when a permission report was written.
    pub report: Option<ReportSummary>,
}

#[derive(Debug)]
pub struct ReportSummary {
    pub path: PathBuf,
    pub method_records: usize,
    pub field_records: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    /// False when a config file already existed.
    pub created: bool,
}

/// Result of running apicheck commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, warnings fail the run like errors do.
    pub strict: bool,
    /// All issues found during the check, in traversal order.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of model files that failed to load.
    pub parse_error_count: usize,
    /// Number of classes the rules ran over.
    pub classes_checked: usize,
}
