//! Schedule command - run the send job after a delay, then on a fixed cadence

use super::{send, Context};
use clap::Args;
use std::thread;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct ScheduleCommand {
    /// Stop after this many runs (default: run until interrupted)
    #[arg(long)]
    runs: Option<usize>,

    /// Seconds between runs, overriding schedule.interval_days
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    interval_secs: Option<u64>,
}

impl ScheduleCommand {
    pub fn exec(&self, ctx: &Context) -> anyhow::Result<()> {
        let schedule = &ctx.config.schedule;
        let interval = self
            .interval_secs
            .map_or_else(|| schedule.interval(), Duration::from_secs);
        log::info!(
            "Scheduler initialized: first run in {}s, then every {}s",
            schedule.initial_delay_secs,
            interval.as_secs()
        );
        thread::sleep(schedule.initial_delay());

        let mut completed = 0;
        loop {
            if let Err(err) = send::run(ctx) {
                log::error!("Holiday reminder run failed: {:#}", err);
            }
            completed += 1;
            if self.runs.is_some_and(|runs| completed >= runs) {
                log::info!("Scheduler stopped after {} run(s)", completed);
                return Ok(());
            }
            thread::sleep(interval);
        }
    }
}
