use crate::error::{AppResult, Error};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// en-US "full" date style followed by "long" time style,
/// e.g. `Monday, January 1, 2024 at 5:00:00 AM EST`.
///
/// `%Z` prints the zone's abbreviation from chrono-tz. Zones without a
/// lettered abbreviation come out numeric, e.g. `+04` for `Asia/Dubai`,
/// where browsers print `GMT+4`.
const LONG_DATETIME_FORMAT: &str = "%A, %B %-d, %Y at %-I:%M:%S %p %Z";

/// Parse an IANA timezone name such as `America/New_York`
pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| Error::InvalidTimezone(name.to_string()))
}

/// Parse an event date string.
///
/// Accepts RFC 3339 date-times (`2024-01-01T10:00:00Z`, `2024-01-01T10:00:00+02:00`)
/// and bare dates (`2024-01-01`), the latter taken as midnight UTC.
pub fn parse_event_datetime(date_str: &str) -> AppResult<DateTime<Utc>> {
    let trimmed = date_str.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(date_str.to_string()))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| Error::InvalidDate(date_str.to_string()))?;
    Ok(Utc.from_utc_datetime(&midnight))
}

/// Render an instant in the given zone using the long en-US date+time form
pub fn format_long_datetime(instant: &DateTime<Utc>, timezone: &Tz) -> String {
    instant
        .with_timezone(timezone)
        .format(LONG_DATETIME_FORMAT)
        .to_string()
}
