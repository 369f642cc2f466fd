pub mod calendar;
pub mod holidays;
pub mod render;
pub mod roster;
pub mod source;
pub mod text;
pub mod warnings;

// Flat public surface for domain types and functions.
#[allow(unused_imports)]
pub use holidays::{load_holidays, HolidayRecord, HolidaySet, Shore};
pub use render::{extract_body, render, render_plain};
pub use roster::load_roster;
pub use warnings::Warning;
