//! Holidays command - tabular view of the loaded holiday file

use super::Context;
use crate::core::calendar::{holidays_in, MonthPair};
use crate::core::HolidayRecord;
use clap::Args;
use std::io;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct HolidaysCommand {
    /// Only holidays of the two months shown in the reminder
    #[arg(short, long)]
    upcoming: bool,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

/// Row for the holidays table output
#[derive(Debug, Clone, Tabled, serde::Serialize)]
pub struct HolidayRow {
    #[tabled(rename = "Date")]
    pub date: String,

    #[tabled(rename = "Holiday")]
    pub name: String,

    #[tabled(rename = "Shore")]
    pub shore: String,

    #[tabled(rename = "Locations")]
    pub locations: String,
}

impl From<&HolidayRecord> for HolidayRow {
    fn from(holiday: &HolidayRecord) -> Self {
        Self {
            date: holiday.date.format("%Y-%m-%d").to_string(),
            name: holiday.name.clone(),
            shore: holiday
                .shore
                .map_or_else(|| "?".to_string(), |shore| shore.to_string()),
            locations: holiday.locations.clone(),
        }
    }
}

impl HolidaysCommand {
    pub fn exec(&self, ctx: &Context) -> anyhow::Result<()> {
        let set = ctx.load_holidays()?;

        let rows: Vec<HolidayRow> = if self.upcoming {
            MonthPair::containing(ctx.reference_date())
                .months()
                .into_iter()
                .flat_map(|month| holidays_in(&set.holidays, month))
                .map(HolidayRow::from)
                .collect()
        } else {
            let mut all: Vec<&HolidayRecord> = set.holidays.iter().collect();
            all.sort_by_key(|h| h.date);
            all.into_iter().map(HolidayRow::from).collect()
        };

        if self.csv {
            write_csv(&rows)
        } else {
            print_table(&rows);
            Ok(())
        }
    }
}

fn print_table(rows: &[HolidayRow]) {
    if rows.is_empty() {
        println!("No holidays found");
        return;
    }

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()))
        .to_string();
    println!("{}", table);
}

fn write_csv(rows: &[HolidayRow]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
