use super::formatters::{
    format_description, format_date_in, format_location, format_recurrence, FormattedLocation,
};
use super::markup::TrustedMarkup;
use crate::components::events::Event;
use crate::components::session::Session;
use crate::error::AppResult;
use crate::utils::time::parse_timezone;
use askama::Template;
use chrono_tz::Tz;
use tracing::warn;
use url::Url;

/// Display-ready fields of one event
#[derive(Debug, Clone)]
pub struct EventCard {
    pub summary: String,
    pub date: String,
    pub recurrence: String,
    pub location_link: Option<TrustedMarkup>,
    pub location_text: Option<String>,
    pub description: String,
    pub creator: Option<String>,
}

impl EventCard {
    /// Run the formatters over an event.
    ///
    /// The date is shown in the event's own zone when it has a valid one,
    /// otherwise in `fallback_tz`. A date that cannot be formatted is shown raw.
    pub fn from_event(event: &Event, fallback_tz: &Tz) -> Self {
        let timezone = match event.start_timezone.as_deref() {
            Some(name) => parse_timezone(name).unwrap_or_else(|e| {
                warn!("Event '{}': {}, using {}", event.summary, e, fallback_tz);
                *fallback_tz
            }),
            None => *fallback_tz,
        };

        let date = format_date_in(&event.start_datetime, &timezone).unwrap_or_else(|e| {
            warn!("Event '{}': {}", event.summary, e);
            event.start_datetime.clone()
        });

        let (location_link, location_text) = match format_location(event.location.as_deref()) {
            FormattedLocation::Link(markup) => (Some(markup), None),
            FormattedLocation::Text(text) if !text.is_empty() => (None, Some(text)),
            FormattedLocation::Text(_) | FormattedLocation::Empty => (None, None),
        };

        let summary = if event.summary.trim().is_empty() {
            t!("event_untitled").to_string()
        } else {
            event.summary.clone()
        };

        Self {
            summary,
            date,
            recurrence: format_recurrence(event.recurring),
            location_link,
            location_text,
            description: format_description(&event.description).to_string(),
            creator: event
                .creator_name
                .clone()
                .or_else(|| event.creator_email.clone()),
        }
    }
}

/// The event listing page
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub title: String,
    pub logged_in: bool,
    pub login_status: String,
    pub login_label: String,
    pub login_href: String,
    pub load_error: Option<String>,
    pub empty_label: String,
    pub cards: Vec<EventCard>,
}

impl IndexPage {
    /// Page for the current session and the outcome of the events load
    pub fn new(
        session: &Session,
        events: &AppResult<Vec<Event>>,
        timezone: &Tz,
        login_url: &Url,
    ) -> Self {
        let (cards, load_error) = match events {
            Ok(events) => (
                events
                    .iter()
                    .map(|event| EventCard::from_event(event, timezone))
                    .collect(),
                None,
            ),
            Err(_) => (Vec::new(), Some(t!("events_load_failed").to_string())),
        };

        let login_status = match &session.user_email {
            Some(email) => t!("logged_in_as", email = email).to_string(),
            None => t!("logged_in_anonymous").to_string(),
        };

        Self {
            title: t!("events_title").to_string(),
            logged_in: session.logged_in,
            login_status,
            login_label: t!("login_button").to_string(),
            login_href: login_url.to_string(),
            load_error,
            empty_label: t!("events_empty").to_string(),
            cards,
        }
    }
}

/// Render the event listing page to HTML
pub fn render_index(
    session: &Session,
    events: &AppResult<Vec<Event>>,
    timezone: &Tz,
    login_url: &Url,
) -> AppResult<String> {
    Ok(IndexPage::new(session, events, timezone, login_url).render()?)
}
