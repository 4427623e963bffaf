use crate::components::events::{Event, EventLoader, EventsHandle};
use crate::components::session::{navigator_for, Navigator, Session, SessionService};
use crate::config::Config;
use crate::error::{AppResult, Error};
use crate::presentation::render_index;
use chrono_tz::Tz;
use reqwest::Client;
use std::sync::Arc;
use tracing::{error, info};

/// Wires the session, the events loader and the page together
pub struct App {
    session: Arc<SessionService>,
    events: EventsHandle,
    timezone: Tz,
}

impl App {
    /// Build the app with the navigator picked by the configured login mode
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = build_client(config)?;
        let navigator = navigator_for(config.login_mode, client.clone());
        Self::with_navigator(config, client, navigator)
    }

    /// Build the app around a given navigator
    pub fn with_navigator(
        config: &Config,
        client: Client,
        navigator: Arc<dyn Navigator>,
    ) -> AppResult<Self> {
        let session = Arc::new(SessionService::new(config.login_url()?, navigator));
        let loader = EventLoader::from_config(config, client, Arc::clone(&session))?;

        Ok(Self {
            session,
            events: EventsHandle::new(loader),
            timezone: config.timezone()?,
        })
    }

    pub fn session(&self) -> &SessionService {
        &self.session
    }

    pub fn current_session(&self) -> Session {
        self.session.current()
    }

    /// Load the events; the session reflects the response afterwards
    pub async fn load_events(&self) -> AppResult<Vec<Event>> {
        self.events.load_events().await
    }

    /// Load the events and render the page.
    ///
    /// A failed load is rendered as the loading-error placeholder, not returned.
    pub async fn render_page(&self) -> AppResult<String> {
        let events = self.load_events().await;
        if let Err(e) = &events {
            error!("Failed to load events: {}", e);
        }
        render_index(
            &self.session.current(),
            &events,
            &self.timezone,
            self.session.login_url(),
        )
    }

    /// Start the login redirect unless already logged in
    pub async fn login(&self) -> AppResult<bool> {
        self.session.login().await
    }

    /// Stop the events actor
    pub async fn shutdown(&self) -> AppResult<()> {
        info!("Shutting down");
        self.events.shutdown().await
    }
}

/// HTTP client shared by the loader and the fetch navigator
pub fn build_client(config: &Config) -> AppResult<Client> {
    let mut builder =
        Client::builder().user_agent(concat!("eventageous/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(Error::EventsRequest)
}
