use crate::error::{FixtureError, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use log::debug;

/// Parse an IANA timezone name
pub fn parse_timezone(timezone_name: &str) -> Result<Tz> {
    timezone_name
        .parse::<Tz>()
        .map_err(|_| FixtureError::InvalidTimezone(timezone_name.to_string()))
}

/// Combine an ISO date ("2024-09-14") and a wall-clock time ("10:00") in
/// `timezone_name` into the first kick-off instant.
///
/// The result stays in the IANA zone so later days can be stepped on the local
/// calendar. Local times skipped by a DST transition are rejected; repeated
/// local times resolve to the earlier instant.
pub fn resolve_start(
    start_date: &str,
    start_time: &str,
    timezone_name: &str,
) -> Result<DateTime<Tz>> {
    let tz = parse_timezone(timezone_name)?;

    let date = NaiveDate::parse_from_str(start_date.trim(), "%Y-%m-%d")
        .map_err(|e| FixtureError::InvalidStartDate(format!("{}: {}", start_date, e)))?;
    let time = parse_start_time(start_time)?;

    let local = NaiveDateTime::new(date, time);
    let resolved = tz.from_local_datetime(&local).earliest().ok_or_else(|| {
        FixtureError::InvalidStartDate(format!(
            "{} {} does not exist in {}",
            start_date, start_time, timezone_name
        ))
    })?;

    debug!("Resolved start {} {} ({}) to {}", start_date, start_time, timezone_name, resolved);
    Ok(resolved)
}

// Accepts "HH:MM" and the "HH:MM:SS" some browsers submit
fn parse_start_time(start_time: &str) -> Result<NaiveTime> {
    let trimmed = start_time.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|e| FixtureError::InvalidStartDate(format!("{}: {}", start_time, e)))
}

/// Convert a datetime to a specific timezone
pub fn convert_to_timezone(dt: DateTime<FixedOffset>, timezone_name: &str) -> Option<DateTime<Tz>> {
    let tz: Tz = timezone_name.parse().ok()?;
    Some(dt.with_timezone(&tz))
}

/// Format a kick-off time in the venue's local time
pub fn format_with_timezone(dt: DateTime<FixedOffset>, timezone_name: &str) -> String {
    if let Some(local_dt) = convert_to_timezone(dt, timezone_name) {
        format!("{} ({})", local_dt.format("%a %B %d, %Y at %H:%M"), local_dt.format("%Z"))
    } else {
        format!("{} (UTC{})", dt.format("%a %B %d, %Y at %H:%M"), dt.format("%:z"))
    }
}
