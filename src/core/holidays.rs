use super::source::{self, LoadError};
use super::text::clean;
use super::warnings::Warning;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;
use std::path::Path;

/// Format of the `Date` column.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

const REQUIRED_COLUMNS: [&str; 4] = ["Date", "HolidayName", "Shore", "Locations"];

/// Which workforce observes a holiday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shore {
    Onshore,
    Offshore,
    Both,
}

impl Shore {
    /// Match an already cleaned `Shore` cell. Matching is exact.
    pub fn parse(s: &str) -> Option<Shore> {
        match s {
            "Onshore" => Some(Shore::Onshore),
            "Offshore" => Some(Shore::Offshore),
            "Both" => Some(Shore::Both),
            _ => None,
        }
    }
}

impl fmt::Display for Shore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Shore::Onshore => "Onshore",
            Shore::Offshore => "Offshore",
            Shore::Both => "Both",
        };
        f.write_str(s)
    }
}

/// One side of the listing: a holiday is shown under a side when it is
/// observed by that side alone or by both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShoreFilter {
    Onshore,
    Offshore,
}

impl ShoreFilter {
    pub const ALL: [ShoreFilter; 2] = [ShoreFilter::Onshore, ShoreFilter::Offshore];

    pub fn accepts(self, shore: Option<Shore>) -> bool {
        matches!(
            (self, shore),
            (_, Some(Shore::Both))
                | (ShoreFilter::Onshore, Some(Shore::Onshore))
                | (ShoreFilter::Offshore, Some(Shore::Offshore))
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            ShoreFilter::Onshore => "Onshore",
            ShoreFilter::Offshore => "Offshore",
        }
    }

    /// Line shown in place of an empty listing
    pub fn placeholder(self) -> &'static str {
        match self {
            ShoreFilter::Onshore => "No Onshore Holidays",
            ShoreFilter::Offshore => "No Offshore Holidays",
        }
    }
}

/// A holiday with a valid date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayRecord {
    pub date: NaiveDate,
    pub name: String,
    /// `None` when the source cell is not a recognized shore.
    pub shore: Option<Shore>,
    pub locations: String,
}

impl HolidayRecord {
    #[cfg(test)]
    pub fn new(
        date: NaiveDate,
        name: impl Into<String>,
        shore: Shore,
        locations: impl Into<String>,
    ) -> Self {
        Self {
            date,
            name: name.into(),
            shore: Some(shore),
            locations: locations.into(),
        }
    }
}

/// Result of loading a holidays file: every record has a valid date.
#[derive(Debug, Clone, Default)]
pub struct HolidaySet {
    pub holidays: Vec<HolidayRecord>,
    pub warnings: Vec<Warning>,
}

impl HolidaySet {
    /// Number of rows excluded because their date did not parse
    pub fn dropped_rows(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| matches!(w, Warning::InvalidDate { .. }))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

/// Load holidays from a CSV file.
pub fn load_holidays(path: &Path) -> Result<HolidaySet, LoadError> {
    let file = source::open(path)?;
    let set = read_holidays(file)?;
    log::info!(
        "Loaded {} holiday(s) from {}",
        set.holidays.len(),
        path.display()
    );
    Ok(set)
}

/// Read holidays from any CSV source with the columns
/// `Date, HolidayName, Shore, Locations`.
pub fn read_holidays<R: Read>(reader: R) -> Result<HolidaySet, LoadError> {
    let mut rdr = source::reader(reader);
    let headers = rdr.headers()?.clone();
    let [date_col, name_col, shore_col, locations_col] =
        source::column_indices(&headers, REQUIRED_COLUMNS)?;

    let mut set = HolidaySet::default();
    for result in rdr.records() {
        let record = result?;
        let line = source::line_of(&record);
        let raw_date = source::cell(&record, date_col);

        let date = match NaiveDate::parse_from_str(raw_date.trim(), DATE_FORMAT) {
            Ok(date) => date,
            Err(err) => {
                log::debug!("line {}: '{}' is not a date: {}", line, raw_date, err);
                set.warnings.push(Warning::InvalidDate {
                    line,
                    value: raw_date.to_string(),
                });
                continue;
            }
        };

        let name = clean(source::cell(&record, name_col));
        let shore_cell = clean(source::cell(&record, shore_col));
        let shore = Shore::parse(&shore_cell);
        if shore.is_none() {
            let warning = Warning::UnrecognizedShore {
                line,
                holiday: name.clone(),
                value: shore_cell,
            };
            log::warn!("{}", warning);
            set.warnings.push(warning);
        }

        set.holidays.push(HolidayRecord {
            date,
            name,
            shore,
            locations: clean(source::cell(&record, locations_col)),
        });
    }

    let dropped = set.dropped_rows();
    if dropped > 0 {
        log::warn!("{} row(s) were dropped due to invalid date formats", dropped);
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_rows_and_cleans_text() {
        let csv = "Date,HolidayName,Shore,Locations\n\
                   05/26/2025, Memorial\u{a0}Day ,Onshore,USA\n\
                   06/28/2025,Mid Year,\u{a0}Both,All\n";
        let set = read_holidays(csv.as_bytes()).unwrap();

        assert!(set.warnings.is_empty());
        assert_eq!(
            set.holidays,
            vec![
                HolidayRecord::new(date(2025, 5, 26), "Memorial Day", Shore::Onshore, "USA"),
                HolidayRecord::new(date(2025, 6, 28), "Mid Year", Shore::Both, "All"),
            ]
        );
    }

    #[test]
    fn invalid_month_is_dropped_with_one_warning() {
        let csv = "Date,HolidayName,Shore,Locations\n\
                   13/01/2025,Bad,Onshore,USA\n\
                   01/13/2025,Good,Offshore,India\n";
        let set = read_holidays(csv.as_bytes()).unwrap();

        assert_eq!(set.dropped_rows(), 1);
        assert_eq!(
            set.warnings,
            vec![Warning::InvalidDate {
                line: 2,
                value: "13/01/2025".to_string()
            }]
        );
        assert_eq!(set.holidays.len(), 1);
        assert_eq!(set.holidays[0].date, date(2025, 1, 13));
    }

    #[test]
    fn iso_and_empty_dates_are_dropped() {
        let csv = "Date,HolidayName,Shore,Locations\n\
                   2025-01-01,Iso,Both,All\n\
                   ,Blank,Both,All\n\
                   12/25/2025,Christmas,Both,All\n";
        let set = read_holidays(csv.as_bytes()).unwrap();
        assert_eq!(set.dropped_rows(), 2);
        assert_eq!(set.holidays.len(), 1);
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "Date,HolidayName,Locations\n05/26/2025,Memorial Day,USA\n";
        let err = read_holidays(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { column: "Shore" }));
    }

    #[test]
    fn empty_source_is_missing_columns() {
        let err = read_holidays("".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { column: "Date" }));
    }

    #[test]
    fn missing_file_is_source_not_found() {
        let err = load_holidays(Path::new("no/such/holidays.csv")).unwrap_err();
        assert!(matches!(err, LoadError::SourceNotFound(_)));
    }

    #[test]
    fn unrecognized_shore_is_kept_and_reported() {
        let csv = "Date,HolidayName,Shore,Locations\n\
                   07/04/2025,Independence Day,onshore,USA\n";
        let set = read_holidays(csv.as_bytes()).unwrap();

        assert_eq!(set.holidays.len(), 1);
        assert_eq!(set.holidays[0].shore, None);
        assert_eq!(set.dropped_rows(), 0);
        assert_eq!(
            set.warnings,
            vec![Warning::UnrecognizedShore {
                line: 2,
                holiday: "Independence Day".to_string(),
                value: "onshore".to_string()
            }]
        );
    }

    #[test]
    fn extra_columns_and_short_rows_are_tolerated() {
        let csv = "Region,Date,HolidayName,Shore,Locations\n\
                   EU,12/26/2025,Boxing Day,Offshore\n";
        let set = read_holidays(csv.as_bytes()).unwrap();
        assert_eq!(
            set.holidays,
            vec![HolidayRecord::new(date(2025, 12, 26), "Boxing Day", Shore::Offshore, "")]
        );
    }

    #[test]
    fn filters_accept_both() {
        for filter in ShoreFilter::ALL {
            assert!(filter.accepts(Some(Shore::Both)));
            assert!(!filter.accepts(None));
        }
        assert!(ShoreFilter::Onshore.accepts(Some(Shore::Onshore)));
        assert!(!ShoreFilter::Onshore.accepts(Some(Shore::Offshore)));
        assert!(ShoreFilter::Offshore.accepts(Some(Shore::Offshore)));
        assert!(!ShoreFilter::Offshore.accepts(Some(Shore::Onshore)));
    }
}
