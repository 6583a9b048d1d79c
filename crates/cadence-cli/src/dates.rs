//! Parsing of date and duration arguments.
//!
//! Accepted date forms, most specific first:
//!
//! - zoned datetime: `2024-05-10T09:00[Europe/Paris]`
//! - instant with offset: `2024-05-10T09:00+02:00`, `2024-05-10T07:00Z`
//! - civil datetime: `2024-05-10T09:00` or `2024-05-10 09:00`
//! - date: `2024-05-10` (midnight)
//!
//! Anything without a zone is placed in the system time zone.

use jiff::{
    civil::{Date, DateTime},
    tz::TimeZone,
    SignedDuration, Timestamp, Zoned,
};

/// The system time zone, or UTC when it cannot be determined.
pub fn local_time_zone() -> TimeZone {
    TimeZone::try_system().unwrap_or_else(|e| {
        log::warn!("Could not determine the system time zone, using UTC: {e}");
        TimeZone::UTC
    })
}

/// clap value parser for `--due`, `--reminder` and friends.
pub fn parse_when(input: &str) -> Result<Zoned, String> {
    let input = input.trim();

    if let Ok(zoned) = input.parse::<Zoned>() {
        return Ok(zoned);
    }
    if let Ok(timestamp) = input.parse::<Timestamp>() {
        return Ok(timestamp.to_zoned(local_time_zone()));
    }
    if let Ok(datetime) = input.parse::<DateTime>() {
        return datetime
            .to_zoned(local_time_zone())
            .map_err(|e| format!("invalid date '{input}': {e}"));
    }
    if let Ok(date) = input.parse::<Date>() {
        return date
            .to_zoned(local_time_zone())
            .map_err(|e| format!("invalid date '{input}': {e}"));
    }

    Err(format!(
        "invalid date '{input}': expected YYYY-MM-DD, YYYY-MM-DDTHH:MM or a zoned datetime \
         such as 2024-05-10T09:00[Europe/Paris]"
    ))
}

/// clap value parser for `--before` style instants.
pub fn parse_instant(input: &str) -> Result<Timestamp, String> {
    parse_when(input).map(|zoned| zoned.timestamp())
}

/// clap value parser for `--remind-before`: `15m`, `1h 30m` or ISO 8601
/// (`PT15M`).
pub fn parse_lead_time(input: &str) -> Result<SignedDuration, String> {
    let lead = input
        .trim()
        .parse::<SignedDuration>()
        .map_err(|e| format!("invalid duration '{input}': {e}"))?;
    if lead.is_negative() {
        return Err(format!("invalid duration '{input}': must not be negative"));
    }
    Ok(lead)
}
