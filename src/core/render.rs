//! Holiday reminder email rendering.
//!
//! Produces a self-contained HTML document with inline styling: a two-month
//! holiday listing split by shore and two month calendars with holiday days
//! highlighted. All free text is escaped by the templates.

use super::calendar::{
    holidays_in, DayColor, MonthGrid, MonthPair, ShoreDays, YearMonth, WEEKDAY_HEADERS,
};
use super::holidays::{HolidayRecord, ShoreFilter};
use chrono::{Datelike, NaiveDate};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

const STYLE: &str = r#"
body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    line-height: 1.6;
    color: #333333;
    background-color: #f4f7f6;
    margin: 0;
    padding: 0;
}
.email-container {
    max-width: 900px;
    margin: 30px auto;
    background-color: #ffffff;
    padding: 30px;
    border-radius: 12px;
    box-shadow: 0 8px 16px rgba(0,0,0,0.1);
    border: 1px solid #e0e0e0;
    box-sizing: border-box;
}
.header {
    text-align: center;
    padding-bottom: 20px;
    border-bottom: 1px solid #eeeeee;
    margin-bottom: 30px;
}
.footer {
    text-align: center;
    padding-top: 30px;
    margin-top: 30px;
    border-top: 1px solid #eeeeee;
    font-size: 14px;
    color: #777777;
}
.calendar-table td span {
    word-break: normal;
    white-space: nowrap;
}
"#;

const PARAGRAPH: &str = "font-size: 16px; color: #333333; text-align: left;";
const ACCENT: &str = "color: #007bff;";
const OUTER_TABLE: &str = "display: inline-block; width: auto; min-width: 600px; max-width: 90%; margin: 0 auto 30px auto; border-radius: 8px; overflow: hidden; background-color: #ffffff; box-shadow: 0 4px 8px rgba(0,0,0,0.05);";
const MONTH_HEADING: &str = "background-color:#e9ecef; padding: 15px; font-size: 18px; color: #333333; text-align: center; border-bottom: 1px solid #dee2e6;";
const LIST: &str = "list-style-type:none; padding:0; margin:0;";
const ENTRY: &str = "margin-bottom: 8px; font-size: 14px; color: #555555;";
const PLACEHOLDER: &str = "font-size: 14px; color: #777777;";
const GRID_TABLE: &str = "width:100%; border-collapse: collapse; font-size: 15px; text-align: center; border: 0;";
const GRID_TITLE: &str = "text-align:center; font-size: 16px; padding:10px 0; background-color: #f0f0f0; color: #333;";
const GRID_WEEKDAY: &str = "background-color: #f8f9fa; padding: 10px; color: #555555; text-align: center; border-bottom: 1px solid #e0e0e0; border-top: 1px solid #e0e0e0; font-size: 14px; font-weight: bold;";
const GRID_DAY: &str = "padding: 10px; border: 1px solid #e0e0e0; text-align: center; vertical-align: middle; height: 40px; font-size: 14px;";
const LEGEND_LABEL: &str = "font-size: 14px; color: #555555; font-weight: 500;";

/// Holidays of one displayed month.
#[derive(Debug, Clone)]
pub struct MonthSection<'a> {
    pub month: YearMonth,
    pub holidays: Vec<&'a HolidayRecord>,
}

impl<'a> MonthSection<'a> {
    pub fn new(holidays: &'a [HolidayRecord], month: YearMonth) -> Self {
        Self {
            month,
            holidays: holidays_in(holidays, month),
        }
    }

    /// Entries shown under one shore column, in date order
    pub fn listing(&self, filter: ShoreFilter) -> Vec<ListingEntry<'a>> {
        self.holidays
            .iter()
            .copied()
            .filter(|h| filter.accepts(h.shore))
            .map(ListingEntry)
            .collect()
    }

    pub fn shore_days(&self) -> ShoreDays {
        ShoreDays::from_holidays(self.holidays.iter().copied())
    }
}

/// One listing line, displayed as "May 26: Memorial Day (USA)".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingEntry<'a>(pub &'a HolidayRecord);

impl ListingEntry<'_> {
    pub fn day_label(&self) -> String {
        self.0.date.format("%b %d").to_string()
    }
}

impl fmt::Display for ListingEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.day_label(),
            self.0.name,
            self.0.locations
        )
    }
}

/// Render the reminder email for the month containing `reference` and the
/// month after it.
///
/// Output depends only on the arguments; the copyright year in the footer is
/// the year of `reference`.
pub fn render(
    holidays: &[HolidayRecord],
    reference: NaiveDate,
    company_footer: &str,
    signature_name: &str,
) -> String {
    let pair = MonthPair::containing(reference);
    let sections = pair.months().map(|month| MonthSection::new(holidays, month));

    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Holiday Reminder" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                div class="email-container" {
                    div class="header" style="text-align: center;" {
                        h1 style="color: #007bff; font-size: 28px; margin: 0; text-align: center;" {
                            "🎉 Holiday Reminder! 🎉"
                        }
                    }
                    (holiday_table(&pair, &sections))
                    (calendar_table(&pair, &sections))
                    (legend())
                    p style={ (PARAGRAPH) " margin-top: 40px;" } {
                        "Wishing you restful and joyful holidays!" br;
                        "Let's plan deliverables accordingly without affecting Holidays!"
                    }
                    p style=(PARAGRAPH) {
                        "Best regards," br;
                        strong style=(ACCENT) { (signature_name) }
                    }
                    div class="footer" {
                        p { "This is an automated reminder. Please do not reply to this email." }
                        p { "© " (reference.year()) " " (company_footer) }
                    }
                }
            }
        }
    };
    markup.into_string()
}

fn holiday_table(pair: &MonthPair, sections: &[MonthSection<'_>; 2]) -> Markup {
    html! {
        p style={ (PARAGRAPH) " margin-bottom: 20px;" } { "Hi Team," }
        p style={ (PARAGRAPH) " margin-bottom: 30px;" } {
            "Here are the upcoming holidays for "
            strong style=(ACCENT) { (pair.current.to_string()) }
            " and "
            strong style=(ACCENT) { (pair.next.to_string()) }
            ":"
        }
        div style="width: 100%; text-align: center;" {
            table border="0" cellpadding="0" cellspacing="0" style=(OUTER_TABLE) {
                tr {
                    @for section in sections {
                        th colspan="2" style=(MONTH_HEADING) { (section.month.to_string()) " Holidays" }
                    }
                }
                tr {
                    @for section in sections {
                        @for filter in ShoreFilter::ALL {
                            (listing_cell(section, filter))
                        }
                    }
                }
            }
        }
    }
}

fn listing_cell(section: &MonthSection<'_>, filter: ShoreFilter) -> Markup {
    let (border, heading_color) = match filter {
        ShoreFilter::Onshore => ("border-right: 1px solid #dee2e6; ", "#007bff"),
        ShoreFilter::Offshore => ("", "#28a745"),
    };
    let entries = section.listing(filter);
    html! {
        td style={ "vertical-align: top; padding: 20px; " (border) "border-bottom: 1px solid #dee2e6; width: 25%;" } {
            h4 style={ "margin-top:0; color: " (heading_color) "; font-size: 16px; text-align: center;" } {
                (filter.label())
            }
            ul style=(LIST) {
                @if entries.is_empty() {
                    li style=(PLACEHOLDER) { (filter.placeholder()) }
                }
                @for entry in &entries {
                    li style=(ENTRY) {
                        strong { (entry.day_label()) }
                        ": " (entry.0.name) " "
                        span style="color: #888888;" { "(" (entry.0.locations) ")" }
                    }
                }
            }
        }
    }
}

fn calendar_table(pair: &MonthPair, sections: &[MonthSection<'_>; 2]) -> Markup {
    html! {
        p style={ (PARAGRAPH) " margin-top: 40px;" } { "A quick look at your holiday calendars:" }
        div style="width: 100%; text-align: center;" {
            table border="0" cellpadding="0" cellspacing="0" style=(OUTER_TABLE) {
                tr {
                    @for section in sections {
                        th colspan="2" style=(MONTH_HEADING) { (section.month.to_string()) }
                    }
                }
                tr {
                    @for section in sections {
                        @let background = if section.month == pair.current { "#f8f9fa" } else { "#e9ecef" };
                        td colspan="2" style="vertical-align: top; padding: 20px; border-bottom: 1px solid #dee2e6;" {
                            div style={ "background-color: " (background) "; border-radius: 6px; padding: 20px;" } {
                                (month_grid(&MonthGrid::new(section.month), &section.shore_days()))
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Inline style of a highlighted day number
pub fn highlight_style(color: DayColor) -> String {
    format!(
        "background-color: {}; color: #333; font-weight: bold; padding: 4px 6px; border-radius: 4px; display: inline-block;",
        color.fill()
    )
}

fn month_grid(grid: &MonthGrid, days: &ShoreDays) -> Markup {
    html! {
        table class="calendar-table" style=(GRID_TABLE) {
            tr {
                th colspan="7" style=(GRID_TITLE) { (grid.month.to_string()) }
            }
            tr {
                @for weekday in WEEKDAY_HEADERS {
                    th style=(GRID_WEEKDAY) { (weekday) }
                }
            }
            @for week in &grid.weeks {
                tr {
                    @for cell in week {
                        td style=(GRID_DAY) {
                            @if let Some(day) = cell {
                                @if let Some(color) = days.color(*day) {
                                    span style=(highlight_style(color)) { (day) }
                                } @else {
                                    (day)
                                }
                            } @else {
                                (PreEscaped("&nbsp;"))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn legend() -> Markup {
    html! {
        div style="margin-top: 30px; text-align: center;" {
            table border="0" cellpadding="0" cellspacing="0" style="display: inline-block; margin: 0 auto;" {
                tr {
                    @for color in DayColor::LEGEND {
                        td style="padding: 8px 5px; text-align: center;" {
                            table border="0" cellpadding="0" cellspacing="0" style="display: inline-block;" {
                                tr {
                                    td bgcolor=(color.fill()) width="40" height="20"
                                        style={ "border: 1px solid " (color.border()) "; background-color: " (color.fill()) ";" } {
                                        (PreEscaped("&nbsp;"))
                                    }
                                }
                            }
                        }
                        td style="padding: 8px 10px 8px 5px; text-align: left;" {
                            span style=(LEGEND_LABEL) { (color.label()) }
                        }
                    }
                }
            }
        }
    }
}

/// Plain-text rendition of the listings, used as the text alternative of
/// outgoing mail.
pub fn render_plain(holidays: &[HolidayRecord], reference: NaiveDate, signature_name: &str) -> String {
    let pair = MonthPair::containing(reference);
    let mut lines = vec![
        "Hi Team,".to_string(),
        String::new(),
        format!(
            "Here are the upcoming holidays for {} and {}:",
            pair.current, pair.next
        ),
    ];
    for month in pair.months() {
        let section = MonthSection::new(holidays, month);
        lines.push(String::new());
        lines.push(format!("{} Holidays", month));
        for filter in ShoreFilter::ALL {
            lines.push(format!("  {}:", filter.label()));
            let entries = section.listing(filter);
            if entries.is_empty() {
                lines.push(format!("    - {}", filter.placeholder()));
            }
            lines.extend(entries.iter().map(|entry| format!("    - {}", entry)));
        }
    }
    lines.extend([
        String::new(),
        "Wishing you restful and joyful holidays!".to_string(),
        "Let's plan deliverables accordingly without affecting Holidays!".to_string(),
        String::new(),
        "Best regards,".to_string(),
        signature_name.to_string(),
    ]);
    lines.join("\n")
}

static BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<body>(.*?)</body>").expect("valid body pattern"));

/// Content between `<body>` and `</body>`, trimmed, for mail clients that
/// reject full documents. Input without body markers is returned unchanged.
pub fn extract_body(document: &str) -> &str {
    BODY.captures(document)
        .and_then(|caps| caps.get(1))
        .map_or(document, |body| body.as_str().trim())
}
