use std::path::PathBuf;

use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CheckSummary, CommandResult, CommandSummary, ReportSummary},
};

use crate::{
    core::{CheckContext, PermissionReport},
    issues::Issue,
    rules::{ComplianceChecker, EnabledChecks},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Todo,
    IntDef,
    Nullable,
    Permission,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Todo,
            CheckRule::IntDef,
            CheckRule::Nullable,
            CheckRule::Permission,
        ]
    }

    /// Checks to run for the rules selected on the command line. No
    /// selection means every rule.
    pub fn enabled(rules: &[CheckRule]) -> EnabledChecks {
        let rules = if rules.is_empty() {
            CheckRule::all()
        } else {
            rules.to_vec()
        };

        let mut checks = EnabledChecks::none();
        for rule in rules {
            match rule {
                CheckRule::Todo => checks.todo = true,
                CheckRule::IntDef => checks.int_def = true,
                CheckRule::Nullable => checks.nullable = true,
                CheckRule::Permission => checks.permission = true,
            }
        }
        checks
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;
    let checks = CheckRule::enabled(&cmd.checks);

    let mut report = PermissionReport::new();
    report.start();

    let mut checker = ComplianceChecker::new(ctx.codebase(), &ctx.settings, checks, &mut report);
    ctx.codebase().accept(&mut checker);
    let classes_checked = checker.classes_checked();
    tracing::debug!(
        hits = checker.doc_cache().hits(),
        misses = checker.doc_cache().misses(),
        "documentation cache"
    );
    let mut all_issues: Vec<Issue> = checker.into_issues();

    let parse_errors = ctx.parse_errors();
    all_issues.extend(parse_errors.into_iter().map(Issue::ParseError));

    let written = if checks.permission && !args.no_report {
        let path = args
            .report_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(&ctx.config.report_file));
        report.end(&path)?;
        Some(ReportSummary {
            path,
            method_records: report.method_records().len(),
            field_records: report.field_records().len(),
        })
    } else {
        None
    };

    Ok(finish(
        CommandSummary::Check(CheckSummary { report: written }),
        all_issues,
        classes_checked,
        args.strict,
    ))
}
