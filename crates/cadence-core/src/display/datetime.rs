//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp, Zoned};

/// A wrapper around `Timestamp` that formats it in the system time zone.
///
/// # Format
///
/// `YYYY-MM-DD HH:MM:SS TZ`, 24-hour clock, with the time zone abbreviation
/// (e.g. UTC, CET, JST).
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A due or reminder date, shown in the zone it was scheduled in.
///
/// ```rust
/// use cadence_core::display::ScheduledAt;
/// use jiff::{civil::date, tz::TimeZone};
///
/// let due = date(2024, 5, 10).at(9, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap();
/// assert_eq!(ScheduledAt(&due).to_string(), "Fri 2024-05-10 09:00 UTC");
/// ```
pub struct ScheduledAt<'a>(pub &'a Zoned);

impl fmt::Display for ScheduledAt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a %Y-%m-%d %H:%M %Z"))
    }
}
