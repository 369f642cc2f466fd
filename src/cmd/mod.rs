pub mod compose;
pub mod holidays;
pub mod preview;
pub mod save;
pub mod schedule;
pub mod send;
pub mod validate;

use crate::config::Config;
use crate::core::{load_holidays, HolidaySet};
use crate::mail::Reminder;
use anyhow::Context as _;
use chrono::{Local, NaiveDate};
use clap::Subcommand;
use std::path::{Path, PathBuf};

/// File written by `preview` and `save`
pub const PREVIEW_FILE: &str = "holiday_email_preview.html";
/// Draft written by `save`
pub const DRAFT_FILE: &str = "holiday_reminder_draft.eml";

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send the reminder to every valid address in the employee roster
    Send(send::SendCommand),
    /// Send the reminder after a short delay, then repeat on the configured cadence
    Schedule(schedule::ScheduleCommand),
    /// Open the reminder as a draft in the desktop mail client
    Compose(compose::ComposeCommand),
    /// Render the reminder and open it in the browser
    Preview(preview::PreviewCommand),
    /// Save the HTML preview and a draft .eml file
    Save(save::SaveCommand),
    /// Report data-quality issues in the holiday and employee files
    Validate(validate::ValidateCommand),
    /// List loaded holidays
    Holidays(holidays::HolidaysCommand),
}

impl Command {
    pub fn exec(&self, ctx: &Context) -> anyhow::Result<()> {
        match self {
            Command::Send(cmd) => cmd.exec(ctx),
            Command::Schedule(cmd) => cmd.exec(ctx),
            Command::Compose(cmd) => cmd.exec(ctx),
            Command::Preview(cmd) => cmd.exec(ctx),
            Command::Save(cmd) => cmd.exec(ctx),
            Command::Validate(cmd) => cmd.exec(ctx),
            Command::Holidays(cmd) => cmd.exec(ctx),
        }
    }
}

/// Everything a command needs, built once in `main`.
#[derive(Debug)]
pub struct Context {
    pub config: Config,
    reference: Option<NaiveDate>,
    holidays: Option<PathBuf>,
}

impl Context {
    pub fn new(config: Config, reference: Option<NaiveDate>, holidays: Option<PathBuf>) -> Self {
        Self {
            config,
            reference,
            holidays,
        }
    }

    /// Date that selects the displayed months. Without an override this is
    /// today, re-read on every call so scheduled runs move with the calendar.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn holidays_path(&self) -> &Path {
        self.holidays
            .as_deref()
            .unwrap_or(&self.config.files.holidays)
    }

    pub fn load_holidays(&self) -> anyhow::Result<HolidaySet> {
        let path = self.holidays_path();
        load_holidays(path)
            .with_context(|| format!("Failed to load holidays from '{}'", path.display()))
    }

    /// Load holidays and render the reminder, refusing to render from an
    /// empty holiday file.
    pub fn reminder(&self) -> anyhow::Result<Reminder> {
        let set = self.load_holidays()?;
        if set.is_empty() {
            anyhow::bail!(
                "No holiday data found in '{}'",
                self.holidays_path().display()
            );
        }
        Ok(self.render(&set))
    }

    pub fn render(&self, set: &HolidaySet) -> Reminder {
        let reference = self.reference_date();
        log::debug!("Rendering reminder for reference date {}", reference);
        Reminder::render(&set.holidays, reference, &self.config)
    }
}
