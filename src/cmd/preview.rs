//! Preview command - render the reminder and view it in the browser

use super::{Context, PREVIEW_FILE};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct PreviewCommand {
    /// Output file path (default: opens in browser)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl PreviewCommand {
    pub fn exec(&self, ctx: &Context) -> anyhow::Result<()> {
        let reminder = ctx.reminder()?;

        if let Some(ref output_path) = self.output {
            std::fs::write(output_path, &reminder.document)?;
            println!("Preview written to: {}", output_path.display());
        } else {
            let temp_path = std::env::temp_dir().join(PREVIEW_FILE);
            std::fs::write(&temp_path, &reminder.document)?;
            opener::open(&temp_path)?;
            println!("Opened preview in browser: {}", temp_path.display());
        }

        Ok(())
    }
}
