//! Month arithmetic and the day/colour structure behind the calendar grids.

use super::holidays::{HolidayRecord, ShoreFilter};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;
use std::fmt;

/// A calendar month of a given year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    #[cfg(test)]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The following month, rolling the year over after December
    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("valid year and month")
    }

    pub fn days(&self) -> u32 {
        let next = self.succ().first_day();
        next.signed_duration_since(self.first_day()).num_days() as u32
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Displays as "May 2025"
impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_day().format("%B %Y"))
    }
}

/// The two months shown in a reminder: the one containing the reference date
/// and the one after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthPair {
    pub current: YearMonth,
    pub next: YearMonth,
}

impl MonthPair {
    pub fn containing(reference: NaiveDate) -> Self {
        let current = YearMonth::of(reference);
        Self {
            current,
            next: current.succ(),
        }
    }

    pub fn months(&self) -> [YearMonth; 2] {
        [self.current, self.next]
    }
}

/// Holidays falling in `month`, sorted by date. Rows sharing a date keep
/// their source order.
pub fn holidays_in(holidays: &[HolidayRecord], month: YearMonth) -> Vec<&HolidayRecord> {
    let mut in_month: Vec<_> = holidays.iter().filter(|h| month.contains(h.date)).collect();
    in_month.sort_by_key(|h| h.date);
    in_month
}

/// Weeks of a month as rows of seven cells, Sunday first. Cells outside the
/// month are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub weeks: Vec<[Option<u32>; 7]>,
}

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

impl MonthGrid {
    pub fn new(month: YearMonth) -> Self {
        let offset = month.first_day().weekday().num_days_from_sunday() as usize;
        let mut weeks = Vec::new();
        let mut week = [None; 7];
        for day in 1..=month.days() {
            let column = (offset + day as usize - 1) % 7;
            week[column] = Some(day);
            if column == 6 {
                weeks.push(week);
                week = [None; 7];
            }
        }
        if week.iter().any(Option::is_some) {
            weeks.push(week);
        }
        Self { month, weeks }
    }
}

/// Highlight applied to a calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayColor {
    Both,
    OnshoreOnly,
    OffshoreOnly,
}

impl DayColor {
    pub const LEGEND: [DayColor; 3] = [DayColor::OffshoreOnly, DayColor::OnshoreOnly, DayColor::Both];

    pub fn fill(self) -> &'static str {
        match self {
            DayColor::Both => "#90EE90",
            DayColor::OnshoreOnly => "#FFD700",
            DayColor::OffshoreOnly => "#ADD8E6",
        }
    }

    pub fn border(self) -> &'static str {
        match self {
            DayColor::Both => "#7CCD7C",
            DayColor::OnshoreOnly => "#DAA520",
            DayColor::OffshoreOnly => "#87CEEB",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayColor::Both => "Both",
            DayColor::OnshoreOnly => "Onshore",
            DayColor::OffshoreOnly => "Offshore",
        }
    }
}

/// Days of one month split into pairwise disjoint colour sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoreDays {
    pub both: BTreeSet<u32>,
    pub only_onshore: BTreeSet<u32>,
    pub only_offshore: BTreeSet<u32>,
}

impl ShoreDays {
    /// Build from the holidays of a single month.
    pub fn from_holidays<'a>(holidays: impl IntoIterator<Item = &'a HolidayRecord>) -> Self {
        let mut onshore = BTreeSet::new();
        let mut offshore = BTreeSet::new();
        for holiday in holidays {
            if ShoreFilter::Onshore.accepts(holiday.shore) {
                onshore.insert(holiday.date.day());
            }
            if ShoreFilter::Offshore.accepts(holiday.shore) {
                offshore.insert(holiday.date.day());
            }
        }
        let both: BTreeSet<u32> = onshore.intersection(&offshore).copied().collect();
        Self {
            only_onshore: onshore.difference(&both).copied().collect(),
            only_offshore: offshore.difference(&both).copied().collect(),
            both,
        }
    }

    pub fn color(&self, day: u32) -> Option<DayColor> {
        if self.both.contains(&day) {
            Some(DayColor::Both)
        } else if self.only_onshore.contains(&day) {
            Some(DayColor::OnshoreOnly)
        } else if self.only_offshore.contains(&day) {
            Some(DayColor::OffshoreOnly)
        } else {
            None
        }
    }
}
