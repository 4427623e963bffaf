use super::models::{Envelope, Event};
use crate::components::session::SessionService;
use crate::config::Config;
use crate::error::{AppResult, Error};
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, error, info};
use url::Url;

/// Fetches the event list and feeds the reported auth flags into the session
#[derive(Debug, Clone)]
pub struct EventLoader {
    client: Client,
    events_url: Url,
    session: Arc<SessionService>,
}

impl EventLoader {
    pub fn new(client: Client, events_url: Url, session: Arc<SessionService>) -> Self {
        Self {
            client,
            events_url,
            session,
        }
    }

    /// Loader for the events endpoint named in the config
    pub fn from_config(
        config: &Config,
        client: Client,
        session: Arc<SessionService>,
    ) -> AppResult<Self> {
        Ok(Self::new(client, config.events_url()?, session))
    }

    /// Load the events.
    ///
    /// The session is updated before the list is returned, so reading the
    /// session right after this resolves sees the server's flags.
    pub async fn load(&self) -> AppResult<Vec<Event>> {
        info!("Loading events from {}", self.events_url);

        let response = self
            .client
            .get(self.events_url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                error!("Events request failed: {}", e);
                Error::EventsRequest(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Events endpoint answered with HTTP {}", status);
            return Err(Error::EventsStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let events = self.accept_body(&body)?;

        info!("Loaded {} events", events.len());
        Ok(events)
    }

    /// Decode a response body, update the session and hand back the events
    pub fn accept_body(&self, body: &str) -> AppResult<Vec<Event>> {
        let envelope: Envelope = serde_json::from_str(body).map_err(|e| {
            error!("Could not decode events response: {}", e);
            Error::from(e)
        })?;

        let data = envelope.data;
        let events = match (data.events, data.items) {
            (Some(events), _) => events,
            (None, Some(_)) => {
                error!("Events response uses the retired `data.items` envelope");
                return Err(Error::LegacyEnvelope);
            }
            (None, None) => {
                return Err(Error::MalformedEvents(
                    "missing field `events` in `data`".to_string(),
                ));
            }
        };

        if self.session.apply_auth(data.authed, data.email) {
            debug!("Session changed by events response");
        }

        Ok(events)
    }
}
