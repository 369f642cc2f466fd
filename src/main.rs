mod cmd;
mod config;
mod core;
mod mail;

use anyhow::Context as _;
use chrono::NaiveDate;
use clap::{Args, Parser};
use pretty_env_logger::env_logger::{Target, WriteStyle};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Holiday reminder emails for onshore and offshore teams
#[derive(Parser, Debug)]
#[command(name = "holiday-reminder", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: cmd::Command,
}

#[derive(Args, Debug)]
struct GlobalOpts {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Reference date selecting the displayed months, as YYYY-MM-DD (default: today)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Holidays CSV file, overriding the configured one
    #[arg(long, global = true)]
    holidays: Option<PathBuf>,

    /// Append log output to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.log_file.as_deref())?;

    let config = config::Config::load(&cli.global.config).with_context(|| {
        format!(
            "Failed to load configuration from '{}'",
            cli.global.config.display()
        )
    })?;
    let ctx = cmd::Context::new(config, cli.global.date, cli.global.holidays);
    cli.command.exec(&ctx)
}

/// Info level by default; `RUST_LOG` refines it.
fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(log::LevelFilter::Info);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file '{}'", path.display()))?;
        builder
            .target(Target::Pipe(Box::new(file)))
            .write_style(WriteStyle::Never);
    }
    builder.init();
    Ok(())
}
