//! Send command - deliver the reminder to the whole roster over SMTP

use super::Context;
use crate::core::load_roster;
use crate::mail::{self, SendReport};
use anyhow::Context as _;
use clap::Args;

#[derive(Args, Debug)]
pub struct SendCommand {
    /// Render and list recipients without connecting to the mail server
    #[arg(long)]
    dry_run: bool,
}

impl SendCommand {
    pub fn exec(&self, ctx: &Context) -> anyhow::Result<()> {
        if self.dry_run {
            return dry_run(ctx);
        }
        let report = run(ctx)?;
        if !report.failed.is_empty() {
            anyhow::bail!(
                "Failed to send to {} of {} recipient(s)",
                report.failed.len(),
                report.failed.len() + report.sent
            );
        }
        Ok(())
    }
}

/// One complete reminder run: load, render, send to all.
///
/// An empty holiday file or an empty roster ends the run early with a
/// warning and nothing sent.
pub fn run(ctx: &Context) -> anyhow::Result<SendReport> {
    log::info!("--- Running holiday reminder ---");

    let holidays = ctx.load_holidays()?;
    if holidays.is_empty() {
        log::warn!("No holiday data found or file is empty. Skipping email generation.");
        return Ok(SendReport::default());
    }
    let reminder = ctx.render(&holidays);

    let employees = &ctx.config.files.employees;
    let roster = load_roster(employees)
        .with_context(|| format!("Failed to load employees from '{}'", employees.display()))?;
    if roster.recipients.is_empty() {
        log::warn!("No valid recipient emails found. No emails to send.");
        return Ok(SendReport::default());
    }

    let settings = ctx.config.email()?;
    let transport = mail::smtp_transport(settings)?;
    let report = mail::send_all(&transport, &reminder, &settings.sender, &roster.recipients);

    log::info!(
        "--- Holiday reminder run complete: {} sent, {} failed ---",
        report.sent,
        report.failed.len()
    );
    Ok(report)
}

fn dry_run(ctx: &Context) -> anyhow::Result<()> {
    let reminder = ctx.reminder()?;
    let employees = &ctx.config.files.employees;
    let roster = load_roster(employees)
        .with_context(|| format!("Failed to load employees from '{}'", employees.display()))?;

    println!("Subject: {}", reminder.subject);
    println!("Recipients ({}):", roster.recipients.len());
    for recipient in &roster.recipients {
        println!("  {}", recipient);
    }
    println!();
    println!("{}", reminder.text);
    Ok(())
}
