use super::source::{self, LoadError};
use super::text::clean;
use super::warnings::Warning;
use regex::Regex;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

/// Basic shape check of an email address
pub fn is_valid_email(address: &str) -> bool {
    EMAIL.is_match(address)
}

/// Valid recipient addresses, in file order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub recipients: Vec<String>,
    pub warnings: Vec<Warning>,
}

pub fn load_roster(path: &Path) -> Result<Roster, LoadError> {
    let roster = read_roster(source::open(path)?)?;
    log::info!(
        "Found {} recipient(s) in {}",
        roster.recipients.len(),
        path.display()
    );
    Ok(roster)
}

/// Read the `Email` column of an employee CSV. Other columns are ignored.
pub fn read_roster<R: Read>(reader: R) -> Result<Roster, LoadError> {
    let mut rdr = source::reader(reader);
    let headers = rdr.headers()?.clone();
    let [email_col] = source::column_indices(&headers, ["Email"])?;

    let mut roster = Roster::default();
    for result in rdr.records() {
        let record = result?;
        let raw = source::cell(&record, email_col);
        let address = clean(raw);
        if is_valid_email(&address) {
            roster.recipients.push(address);
        } else {
            let warning = Warning::InvalidEmail {
                line: source::line_of(&record),
                value: raw.to_string(),
            };
            log::warn!("{}, skipping", warning);
            roster.warnings.push(warning);
        }
    }
    Ok(roster)
}
