//! Date header normalisation.
//!
//! Headers on the results site read "TODAY", "TOMORROW", or carry a
//! day-first numeric date such as `12.01.2026`. Anything else is passed
//! through trimmed.

use chrono::{Duration, NaiveDate, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// Source of "today" for relative headers.
pub trait Clock: Send + Sync {
    /// Current UTC calendar date.
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

fn numeric_date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(\d{1,2})[./-](\d{1,2})[./-](\d{2,4})").expect("static date pattern is valid")
    })
}

/// Turn a date header into an ISO date, or return it trimmed if it
/// cannot be resolved.
pub fn normalize_date(text: &str, clock: &dyn Clock) -> String {
    let trimmed = text.trim();
    let lower = trimmed.to_lowercase();

    if lower.contains("today") {
        return clock.today().to_string();
    }
    if lower.contains("tomorrow") {
        return (clock.today() + Duration::days(1)).to_string();
    }

    if let Some(date) = parse_numeric_date(trimmed) {
        return date.to_string();
    }

    trimmed.to_string()
}

/// Day-first `D.M.Y` (or `/`, `-`) anywhere in the text. Two-digit years
/// are taken as 20xx.
fn parse_numeric_date(text: &str) -> Option<NaiveDate> {
    let caps = numeric_date_pattern().captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year = &caps[3];
    let year: i32 = if year.len() == 2 {
        format!("20{year}").parse().ok()?
    } else {
        year.parse().ok()?
    };
    NaiveDate::from_ymd_opt(year, month, day)
}
