//! Client-side session record.
//!
//! The session is what this client believes about the login status. It is
//! never verified against the server beyond the flags the events endpoint
//! reports, and it is gone when the process exits.

pub mod navigator;

pub use navigator::{navigator_for, BrowserNavigator, FetchNavigator, Navigator};

use crate::error::AppResult;
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info};
use url::Url;

/// Perceived login state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
    pub user_email: Option<String>,
}

/// Holds the session and notifies subscribers when it changes
pub struct SessionService {
    state: watch::Sender<Session>,
    navigator: Arc<dyn Navigator>,
    login_url: Url,
}

impl fmt::Debug for SessionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionService")
            .field("state", &*self.state.borrow())
            .field("login_url", &self.login_url.as_str())
            .finish()
    }
}

impl SessionService {
    /// Create a logged-out session that sends `login` to `login_url`
    pub fn new(login_url: Url, navigator: Arc<dyn Navigator>) -> Self {
        let (state, _) = watch::channel(Session::default());
        Self {
            state,
            navigator,
            login_url,
        }
    }

    /// Snapshot of the current session
    pub fn current(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.borrow().logged_in
    }

    pub fn user_email(&self) -> Option<String> {
        self.state.borrow().user_email.clone()
    }

    pub fn login_url(&self) -> &Url {
        &self.login_url
    }

    /// Receiver that wakes on every session change
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Apply the authentication flags reported by the events endpoint.
    ///
    /// Absent flags leave the matching field untouched. Returns whether
    /// anything changed.
    pub fn apply_auth(&self, authed: Option<bool>, email: Option<String>) -> bool {
        let changed = self.state.send_if_modified(|session| {
            let mut changed = false;
            if let Some(authed) = authed {
                changed |= session.logged_in != authed;
                session.logged_in = authed;
            }
            if let Some(email) = email {
                changed |= session.user_email.as_deref() != Some(email.as_str());
                session.user_email = Some(email);
            }
            changed
        });

        if changed {
            debug!("Session updated: {:?}", *self.state.borrow());
        }
        changed
    }

    /// Record the intent to log in and send the user to the login endpoint.
    ///
    /// Does nothing when already logged in. Otherwise the session is marked
    /// logged in before navigating; nothing confirms that the login actually
    /// succeeded. Returns whether a navigation was started.
    pub async fn login(&self) -> AppResult<bool> {
        let newly_logged_in = self.state.send_if_modified(|session| {
            if session.logged_in {
                false
            } else {
                session.logged_in = true;
                true
            }
        });

        if !newly_logged_in {
            debug!("Already logged in, skipping login redirect");
            return Ok(false);
        }

        info!("Redirecting to login at {}", self.login_url);
        if let Err(e) = self.navigator.navigate(&self.login_url).await {
            error!("Login redirect failed: {}", e);
            return Err(e);
        }

        Ok(true)
    }
}
