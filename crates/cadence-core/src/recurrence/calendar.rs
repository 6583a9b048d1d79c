//! Calendar arithmetic used by the recurrence rules.
//!
//! All helpers operate on [`Zoned`] values so that "one day" means one
//! calendar day in the task's own time zone (wall-clock time is kept across
//! DST transitions) and month/year steps follow the civil calendar.

use jiff::{
    civil::{Date, Weekday},
    Span, ToSpan, Zoned,
};

/// Adds `days` calendar days, keeping the wall-clock time.
pub fn add_days(zdt: &Zoned, days: i64) -> Option<Zoned> {
    let span = Span::new().try_days(days).ok()?;
    zdt.checked_add(span).ok()
}

/// Adds one calendar month, then clamps the day against `original`.
pub fn add_month(zdt: &Zoned, original: &Zoned) -> Option<Zoned> {
    let shifted = zdt.checked_add(1.month()).ok()?;
    clamp_to_original_day(&shifted, original)
}

/// Adds one calendar year, then clamps the day against `original`.
pub fn add_year(zdt: &Zoned, original: &Zoned) -> Option<Zoned> {
    let shifted = zdt.checked_add(1.year()).ok()?;
    clamp_to_original_day(&shifted, original)
}

/// Re-derives the calendar date of `shifted` from the day-of-month of
/// `original`.
///
/// The result lies in `shifted`'s year and month. When `original`'s day does
/// not exist in that month (the 31st in April, Feb 29 in a common year) the
/// month's last day is used instead. The time of day is taken from `original`
/// unchanged.
///
/// ```rust
/// use cadence_core::recurrence::calendar::clamp_to_original_day;
/// use jiff::{civil::date, tz::TimeZone};
///
/// let original = date(2024, 1, 31).at(10, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap();
/// let shifted = date(2024, 2, 15).at(0, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap();
/// let clamped = clamp_to_original_day(&shifted, &original).unwrap();
/// assert_eq!(clamped.date(), date(2024, 2, 29));
/// assert_eq!(clamped.time(), original.time());
/// ```
pub fn clamp_to_original_day(shifted: &Zoned, original: &Zoned) -> Option<Zoned> {
    let month_start = shifted.date().first_of_month();
    let day = original.day().min(month_start.days_in_month());
    let target = Date::new(month_start.year(), month_start.month(), day).ok()?;
    original
        .with()
        .date(target)
        .build()
        .ok()
}

/// ISO weekday number, Monday = 1 through Sunday = 7.
pub fn iso_weekday(zdt: &Zoned) -> i8 {
    zdt.weekday().to_monday_one_offset()
}

/// Moves one day forward, then past Saturday and Sunday.
///
/// A landing on Saturday advances to Sunday, and a landing on Sunday advances
/// to Monday, so the result is always Monday through Friday.
pub fn next_weekday(zdt: &Zoned) -> Option<Zoned> {
    let mut next = add_days(zdt, 1)?;
    if next.weekday() == Weekday::Saturday {
        next = add_days(&next, 1)?;
    }
    if next.weekday() == Weekday::Sunday {
        next = add_days(&next, 1)?;
    }
    Some(next)
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, tz::TimeZone};

    use super::*;

    fn utc(y: i16, m: i8, d: i8, h: i8, min: i8) -> Zoned {
        date(y, m, d)
            .at(h, min, 0, 0)
            .to_zoned(TimeZone::UTC)
            .expect("valid UTC datetime")
    }

    #[test]
    fn test_iso_weekday_numbering() {
        // 2024-05-06 is a Monday
        assert_eq!(iso_weekday(&utc(2024, 5, 6, 9, 0)), 1);
        assert_eq!(iso_weekday(&utc(2024, 5, 11, 9, 0)), 6);
        assert_eq!(iso_weekday(&utc(2024, 5, 12, 9, 0)), 7);
    }

    #[test]
    fn test_clamp_keeps_day_when_it_fits() {
        let original = utc(2024, 3, 15, 7, 30);
        let shifted = utc(2024, 4, 1, 0, 0);
        let clamped = clamp_to_original_day(&shifted, &original).expect("clamp");
        assert_eq!(clamped, utc(2024, 4, 15, 7, 30));
    }

    #[test]
    fn test_clamp_to_thirty_day_month() {
        let original = utc(2024, 3, 31, 18, 5);
        let shifted = utc(2024, 4, 30, 18, 5);
        let clamped = clamp_to_original_day(&shifted, &original).expect("clamp");
        assert_eq!(clamped, utc(2024, 4, 30, 18, 5));
    }

    #[test]
    fn test_next_weekday_from_saturday_lands_on_monday() {
        // 2024-05-11 is a Saturday; +1 lands on Sunday, which is skipped too
        let next = next_weekday(&utc(2024, 5, 11, 9, 0)).expect("next weekday");
        assert_eq!(next, utc(2024, 5, 13, 9, 0));
    }

    #[test]
    fn test_add_days_crosses_month_and_year() {
        let next = add_days(&utc(2024, 12, 31, 23, 15), 1).expect("add");
        assert_eq!(next, utc(2025, 1, 1, 23, 15));
    }
}
