//! Compose command - open the reminder as a draft in the default mail client

use super::Context;
use anyhow::Context as _;
use clap::Args;

const COMPOSE_FILE: &str = "holiday_reminder.eml";

#[derive(Args, Debug)]
pub struct ComposeCommand {}

impl ComposeCommand {
    pub fn exec(&self, ctx: &Context) -> anyhow::Result<()> {
        let reminder = ctx.reminder()?;
        let eml = reminder.draft_eml(&ctx.config.draft)?;

        let path = std::env::temp_dir().join(COMPOSE_FILE);
        std::fs::write(&path, eml)
            .with_context(|| format!("Failed to write draft to '{}'", path.display()))?;
        opener::open(&path)
            .with_context(|| format!("Could not open '{}' in a mail client", path.display()))?;

        println!("Opened email draft: {}", path.display());
        println!("Fill in To/From/CC/BCC and send!");
        Ok(())
    }
}
