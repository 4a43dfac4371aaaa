//! Calendar-day types for the metrics window and narrative lookup.

use chrono::{Days, NaiveDate, Utc};
use std::fmt;

/// Number of days the detail page looks back from "today".
pub const TRAILING_DAYS: u64 = 14;

/// Inclusive range of calendar days requested from the metrics endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl MetricsWindow {
    /// Trailing window of [`TRAILING_DAYS`] ending at `today`.
    pub fn ending(today: NaiveDate) -> Self {
        let from = today
            .checked_sub_days(Days::new(TRAILING_DAYS))
            .unwrap_or(NaiveDate::MIN);
        Self { from, to: today }
    }

    /// Query pairs for `GET /players/{id}/metrics`, both days as `YYYY-MM-DD`.
    pub fn query(&self) -> [(&'static str, String); 2] {
        [("from", day_string(self.from)), ("to", day_string(self.to))]
    }
}

impl fmt::Display for MetricsWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", day_string(self.from), day_string(self.to))
    }
}

/// Format a day the way the backend expects it in query strings.
pub fn day_string(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Source of "today" for page rendering.
///
/// Pages use the current UTC day; tests pin a fixed day so backend
/// requests are predictable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Utc::now().date_naive(),
            Clock::Fixed(day) => *day,
        }
    }
}
