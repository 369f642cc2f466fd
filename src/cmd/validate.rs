//! Validate command - surface data quality issues without rendering or sending

use super::Context;
use crate::core::{load_roster, Warning};
use anyhow::Context as _;
use clap::Args;
use serde::Serialize;
use std::path::Path;

#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// A validation issue for output
#[derive(Debug, Clone, Serialize)]
struct ValidationIssue {
    #[serde(rename = "type")]
    issue_type: String,
    file: String,
    line: u64,
    message: String,
}

impl ValidationIssue {
    fn new(file: &Path, warning: &Warning) -> Self {
        Self {
            issue_type: warning.kind().to_string(),
            file: file.display().to_string(),
            line: warning.line(),
            message: warning.to_string(),
        }
    }
}

/// JSON output structure
#[derive(Debug, Serialize)]
struct ValidationOutput {
    holidays: usize,
    recipients: usize,
    issue_count: usize,
    issues: Vec<ValidationIssue>,
}

impl ValidateCommand {
    pub fn exec(&self, ctx: &Context) -> anyhow::Result<()> {
        let holidays_path = ctx.holidays_path();
        let holidays = ctx.load_holidays()?;

        let employees = &ctx.config.files.employees;
        let roster = load_roster(employees)
            .with_context(|| format!("Failed to load employees from '{}'", employees.display()))?;

        let issues: Vec<ValidationIssue> = holidays
            .warnings
            .iter()
            .map(|w| ValidationIssue::new(holidays_path, w))
            .chain(roster.warnings.iter().map(|w| ValidationIssue::new(employees, w)))
            .collect();

        let output = ValidationOutput {
            holidays: holidays.holidays.len(),
            recipients: roster.recipients.len(),
            issue_count: issues.len(),
            issues,
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            print_text(&output);
        }

        // Exit with code 1 if issues found
        if output.issue_count > 0 {
            std::process::exit(1);
        }
        Ok(())
    }
}

fn print_text(output: &ValidationOutput) {
    println!();
    println!(
        "VALIDATION RESULTS ({} holiday(s), {} recipient(s))",
        output.holidays, output.recipients
    );
    println!();

    if output.issues.is_empty() {
        println!("\u{2713} No issues found.");
        return;
    }

    println!("\u{26A0} {} issue(s) found:", output.issue_count);
    println!();
    for (i, issue) in output.issues.iter().enumerate() {
        println!("  {}. [{}] {}", i + 1, issue.issue_type, issue.file);
        println!("     {}", issue.message);
        println!();
    }
}
