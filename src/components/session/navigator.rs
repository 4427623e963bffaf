use crate::config::LoginMode;
use crate::error::{AppResult, Error};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::{error, info};
use url::Url;

/// Moves the user to another URL, leaving the current page behind
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, url: &Url) -> AppResult<()>;
}

/// Opens the URL in the system browser
#[derive(Debug, Default, Clone)]
pub struct BrowserNavigator;

#[async_trait]
impl Navigator for BrowserNavigator {
    async fn navigate(&self, url: &Url) -> AppResult<()> {
        info!("Opening {} in the browser", url);
        let target = url.to_string();
        tokio::task::spawn_blocking(move || webbrowser::open(&target))
            .await
            .map_err(|e| Error::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            })?
            .map_err(|e| Error::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Issues a GET to the URL and does not wait for the answer
#[derive(Debug, Clone)]
pub struct FetchNavigator {
    client: Client,
}

impl FetchNavigator {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Navigator for FetchNavigator {
    async fn navigate(&self, url: &Url) -> AppResult<()> {
        let request = self.client.get(url.clone());
        let target = url.clone();

        tokio::spawn(async move {
            match request.send().await {
                Ok(response) => info!("{} answered with {}", target, response.status()),
                Err(e) => error!("Request to {} failed: {}", target, e),
            }
        });

        Ok(())
    }
}

/// Navigator matching the configured login mode
pub fn navigator_for(mode: LoginMode, client: Client) -> Arc<dyn Navigator> {
    match mode {
        LoginMode::Browser => Arc::new(BrowserNavigator),
        LoginMode::Fetch => Arc::new(FetchNavigator::new(client)),
    }
}
