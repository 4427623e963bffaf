use super::markup::{anchor, TrustedMarkup};
use crate::error::AppResult;
use crate::utils::time::{format_long_datetime, parse_event_datetime, parse_timezone};
use chrono_tz::Tz;

const MAP_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&amp;query=";

/// Display form of an event location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedLocation {
    /// No location given
    Empty,
    /// Shown as escaped text
    Text(String),
    /// Link markup, inserted unescaped
    Link(TrustedMarkup),
}

/// Turn a location into a link when it looks like one.
///
/// An `http://` or `https://` location links to itself. Otherwise a location
/// containing a comma is taken for a street address and links to a map
/// search. Anything else is returned as is.
pub fn format_location(location: Option<&str>) -> FormattedLocation {
    let Some(location) = location else {
        return FormattedLocation::Empty;
    };

    if location.starts_with("http://") || location.starts_with("https://") {
        return FormattedLocation::Link(anchor(location, location));
    }

    if location.contains(',') {
        let href = format!("{}{}", MAP_SEARCH_URL, urlencoding::encode(location));
        return FormattedLocation::Link(anchor(&href, location));
    }

    FormattedLocation::Text(location.to_string())
}

pub fn format_recurrence(recurring: bool) -> String {
    if recurring {
        t!("event_recurring").to_string()
    } else {
        t!("event_one_time").to_string()
    }
}

// TODO: render links and line breaks in descriptions
pub fn format_description(description: &str) -> &str {
    description
}

/// Long en-US date and time of `date` in the IANA zone `time_zone`.
///
/// The locale is fixed to en-US whatever the user prefers.
pub fn format_date(date: &str, time_zone: &str) -> AppResult<String> {
    let timezone = parse_timezone(time_zone)?;
    format_date_in(date, &timezone)
}

/// [`format_date`] with an already parsed zone
pub fn format_date_in(date: &str, timezone: &Tz) -> AppResult<String> {
    let instant = parse_event_datetime(date)?;
    Ok(format_long_datetime(&instant, timezone))
}
