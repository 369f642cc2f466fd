use serde::{Deserialize, Serialize};
use std::fmt;

/// Data-quality warnings emitted while loading holiday and roster files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Warning {
    /// Row dropped because `Date` is not a valid `MM/DD/YYYY` date.
    InvalidDate { line: u64, value: String },
    /// Row kept, but its shore is none of Onshore/Offshore/Both, so it is
    /// listed under neither column and never coloured.
    UnrecognizedShore {
        line: u64,
        holiday: String,
        value: String,
    },
    /// Roster row skipped because the address is empty or malformed.
    InvalidEmail { line: u64, value: String },
}

impl Warning {
    pub fn kind(&self) -> &'static str {
        match self {
            Warning::InvalidDate { .. } => "InvalidDate",
            Warning::UnrecognizedShore { .. } => "UnrecognizedShore",
            Warning::InvalidEmail { .. } => "InvalidEmail",
        }
    }

    pub fn line(&self) -> u64 {
        match self {
            Warning::InvalidDate { line, .. }
            | Warning::UnrecognizedShore { line, .. }
            | Warning::InvalidEmail { line, .. } => *line,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::InvalidDate { line, value } => {
                write!(f, "line {line}: invalid date '{value}', expected MM/DD/YYYY")
            }
            Warning::UnrecognizedShore {
                line,
                holiday,
                value,
            } => write!(
                f,
                "line {line}: '{holiday}' has unrecognized shore '{value}', expected Onshore, Offshore or Both"
            ),
            Warning::InvalidEmail { line, value } => {
                write!(f, "line {line}: invalid or empty email '{value}'")
            }
        }
    }
}
