use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::feast::{parser::parse_feast_entry, segmenter::FeastRecord};

pub static MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Day headings look like `<a name="32">February 1</a>`; the anchor number is
// a running day-of-year counter, the month and day come from the visible text.
static REGEX_DAY_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r#"name="\d+">({})\s+(\d{{1,2}})"#,
        MONTHS.join("|")
    ))
    .unwrap()
});

// Every feast entry under a heading starts with a bare <br> marker.
static REGEX_FEAST_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*<br>(.*)$").unwrap());

// The pages are not consistent about line endings.
static REGEX_NEW_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\n|\r").unwrap());

// A parsed record plus the position and raw text the page gives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarFeast {
    pub month: String,
    pub day: u32,

    #[serde(flatten)]
    pub record: FeastRecord,

    pub line: String,
}

// Walks one year page: headings set the current month/day, <br> lines are
// feast entries parsed under that heading.
pub fn parse_year_page(txt: &str) -> Result<Vec<CalendarFeast>> {
    let mut feasts = Vec::new();

    let mut heading: Option<(String, u32)> = None;

    for line in REGEX_NEW_LINE.split(txt) {
        if let Some(caps) = REGEX_DAY_HEADING.captures(line) {
            let month = caps[1].to_owned();
            let day = caps[2]
                .parse()
                .with_context(|| format!("Invalid day number in heading: {:?}", line))?;

            heading = Some((month, day));
        } else if let Some(caps) = REGEX_FEAST_LINE.captures(line) {
            let entry = caps
                .get(1)
                .map(|m| m.as_str())
                .context("Feast entry line without text")?;

            let (month, day) = heading
                .clone()
                .with_context(|| format!("Feast entry before any day heading: {:?}", entry))?;

            let record = parse_feast_entry(entry)
                .with_context(|| format!("Failed to parse feast entry: {:?}", entry))?;

            feasts.push(CalendarFeast {
                month,
                day,
                record,
                line: entry.to_owned(),
            });
        }
    }

    Ok(feasts)
}
