//! Helpers for working with the configured local timezone.

use time::{Date, Month, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

/// Resolve a canonical timezone name (e.g. "Pacific/Auckland") to the UTC
/// offset currently in effect there.
pub(crate) fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Today's date in the given timezone.
///
/// # Errors
/// Returns [Error::InvalidTimezone] if `canonical_timezone` is not a known
/// timezone name.
pub(crate) fn current_local_date(canonical_timezone: &str) -> Result<Date, Error> {
    let offset = get_local_offset(canonical_timezone)
        .ok_or_else(|| Error::InvalidTimezone(canonical_timezone.to_owned()))?;

    Ok(OffsetDateTime::now_utc().to_offset(offset).date())
}

/// A human-readable month and year label for a date, e.g. "August 2026".
pub(crate) fn month_label(date: Date) -> String {
    let month = match date.month() {
        Month::January => "January",
        Month::February => "February",
        Month::March => "March",
        Month::April => "April",
        Month::May => "May",
        Month::June => "June",
        Month::July => "July",
        Month::August => "August",
        Month::September => "September",
        Month::October => "October",
        Month::November => "November",
        Month::December => "December",
    };

    format!("{month} {}", date.year())
}

#[cfg(test)]
mod timezone_tests {
    use time::macros::date;

    use super::{current_local_date, get_local_offset, month_label};

    #[test]
    fn resolves_known_timezone() {
        assert!(get_local_offset("Pacific/Auckland").is_some());
    }

    #[test]
    fn rejects_unknown_timezone() {
        assert!(get_local_offset("Atlantis/Poseidonia").is_none());
    }

    #[test]
    fn current_local_date_fails_for_unknown_timezone() {
        assert!(current_local_date("Atlantis/Poseidonia").is_err());
    }

    #[test]
    fn formats_month_label() {
        assert_eq!(month_label(date!(2026 - 08 - 29)), "August 2026");
        assert_eq!(month_label(date!(2024 - 01 - 01)), "January 2024");
    }
}
