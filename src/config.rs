use chrono::{Datelike, Duration, Months, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_COLUMNS: usize = 80;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Day,
    Week,
    Month,
}

impl Granularity {
    /// First day of the bucket containing `date`. Weeks start on Sunday.
    pub fn align(self, date: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Day => date,
            Granularity::Week => {
                date - Duration::days(date.weekday().num_days_from_sunday() as i64)
            }
            Granularity::Month => date.with_day(1).unwrap_or(date),
        }
    }

    /// Start of the bucket after the one starting at `start`.
    pub fn advance(self, start: NaiveDate) -> Option<NaiveDate> {
        match self {
            Granularity::Day => start.succ_opt(),
            Granularity::Week => start.checked_add_signed(Duration::days(7)),
            Granularity::Month => start.checked_add_months(Months::new(1)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report settings, built once per run and passed down by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub granularity: Granularity,
    /// Emit buckets without any commit.
    pub include_empty: bool,
    /// Output width in columns; bars get whatever the fixed prefix leaves.
    pub width: usize,
    pub color: bool,
}

impl ReportConfig {
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            ..Self::default()
        }
    }

    pub fn with_include_empty(mut self, include_empty: bool) -> Self {
        self.include_empty = include_empty;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            granularity: Granularity::Day,
            include_empty: false,
            width: DEFAULT_COLUMNS,
            color: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn week_aligns_to_preceding_sunday() {
        // 2019-01-01 is a Tuesday
        assert_eq!(Granularity::Week.align(date("2019-01-01")), date("2018-12-30"));
        assert_eq!(Granularity::Week.align(date("2018-12-30")), date("2018-12-30"));
        assert_eq!(Granularity::Week.align(date("2019-01-05")), date("2018-12-30"));
    }

    #[test]
    fn month_aligns_to_first_day() {
        assert_eq!(Granularity::Month.align(date("2020-02-29")), date("2020-02-01"));
        assert_eq!(Granularity::Day.align(date("2020-02-29")), date("2020-02-29"));
    }

    #[test]
    fn advance_steps_by_granularity() {
        assert_eq!(Granularity::Day.advance(date("2020-02-28")), Some(date("2020-02-29")));
        assert_eq!(Granularity::Week.advance(date("2018-12-30")), Some(date("2019-01-06")));
        assert_eq!(Granularity::Month.advance(date("2020-01-01")), Some(date("2020-02-01")));
        assert_eq!(Granularity::Month.advance(date("2020-12-01")), Some(date("2021-01-01")));
        assert_eq!(Granularity::Day.advance(NaiveDate::MAX), None);
    }

    #[test]
    fn granularity_displays_lowercase() {
        assert_eq!(Granularity::Week.to_string(), "week");
        assert_eq!(serde_json::to_string(&Granularity::Month).unwrap(), "\"month\"");
    }
}
