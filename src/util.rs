use crate::error::{ContribError, Result};
use crate::model::DateRange;
use chrono::{DateTime, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a filter boundary: `YYYY-MM-DD`, RFC3339, or a humantime duration
/// (`90days`, `2weeks`) counted back from `today`.
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.date_naive());
    }

    if let Ok(duration) = humantime::parse_duration(input) {
        let offset = chrono::Duration::from_std(duration)
            .map_err(|_| ContribError::InvalidDate(format!("Duration overflow for '{input}'")))?;
        return today
            .checked_sub_signed(offset)
            .ok_or_else(|| ContribError::InvalidDate(format!("Duration overflow for '{input}'")));
    }

    Err(ContribError::InvalidDate(format!(
        "Wrong date format: '{input}', expected YYYY-MM-DD"
    )))
}

pub fn resolve_range(
    since: Option<&str>,
    until: Option<&str>,
    today: NaiveDate,
) -> Result<DateRange> {
    let mut range = DateRange::new();

    let since = since.map(|s| parse_date(s, today)).transpose()?;
    let until = until.map(|u| parse_date(u, today)).transpose()?;

    if let (Some(s), Some(u)) = (since, until) {
        if s > u {
            return Err(ContribError::InvalidDate(format!(
                "Invalid range: since ({s}) is after until ({u})"
            )));
        }
    }

    if let Some(s) = since {
        range = range.with_since(s);
    }
    if let Some(u) = until {
        range = range.with_until(u);
    }

    Ok(range)
}
