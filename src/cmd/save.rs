//! Save command - write the HTML preview and a draft email to disk

use super::{Context, DRAFT_FILE, PREVIEW_FILE};
use anyhow::Context as _;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SaveCommand {
    /// Directory to write the files into
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,
}

impl SaveCommand {
    pub fn exec(&self, ctx: &Context) -> anyhow::Result<()> {
        let reminder = ctx.reminder()?;
        let preview = self.dir.join(PREVIEW_FILE);
        let draft = self.dir.join(DRAFT_FILE);

        std::fs::write(&preview, &reminder.document)
            .with_context(|| format!("Failed to write '{}'", preview.display()))?;
        std::fs::write(&draft, reminder.draft_eml(&ctx.config.draft)?)
            .with_context(|| format!("Failed to write '{}'", draft.display()))?;

        println!("Files saved:");
        println!("  - {} (preview)", preview.display());
        println!("  - {} (email draft)", draft.display());
        println!("Email Subject: {}", reminder.subject);
        Ok(())
    }
}
