use crate::error::{config_error, env_error, AppResult, Error};
use crate::utils::time::parse_timezone;
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Default location of the optional config file
pub const DEFAULT_CONFIG_PATH: &str = "config/eventageous.toml";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_EVENTS_PATH: &str = "/api/events";
pub const DEFAULT_LOGIN_PATH: &str = "/auth/login";

/// How the login action reaches the login endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginMode {
    /// Open the login endpoint in the system browser
    #[default]
    Browser,
    /// Fire a GET at the login endpoint without waiting for it
    Fetch,
}

impl FromStr for LoginMode {
    type Err = Error;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "browser" => Ok(LoginMode::Browser),
            "fetch" => Ok(LoginMode::Fetch),
            other => Err(config_error(&format!("Unknown login mode: {}", other))),
        }
    }
}

/// Main configuration structure for the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the backend serving the API and the auth endpoints
    pub api_base_url: String,
    /// Path of the events endpoint
    pub events_path: String,
    /// Path of the login endpoint
    pub login_path: String,
    /// IANA timezone used for event dates without their own zone
    pub timezone: String,
    /// How `login` reaches the login endpoint
    pub login_mode: LoginMode,
    /// Request timeout for the events fetch; none when unset
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            events_path: DEFAULT_EVENTS_PATH.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            timezone: "UTC".to_string(),
            login_mode: LoginMode::default(),
            request_timeout_secs: None,
        }
    }
}

/// Keys accepted in the config file; every key is optional and overrides the environment
#[derive(Debug, Default, Deserialize)]
struct FileOverrides {
    api_base_url: Option<String>,
    events_path: Option<String>,
    login_path: Option<String>,
    timezone: Option<String>,
    login_mode: Option<LoginMode>,
    request_timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let mut config = Self::from_env()?;

        let path =
            env::var("EVENTAGEOUS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        if Path::new(&path).exists() {
            let content = fs::read_to_string(&path)?;
            config.apply_toml_str(&content)?;
            tracing::debug!("Applied config file {}", path);
        }

        config.validate()?;
        Ok(config)
    }

    /// Build a config from environment variables, falling back to defaults
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();

        let login_mode = match env::var("LOGIN_MODE") {
            Ok(mode) => mode.parse()?,
            Err(_) => defaults.login_mode,
        };

        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(secs) => Some(
                secs.parse::<u64>()
                    .map_err(|_| env_error("REQUEST_TIMEOUT_SECS"))?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            api_base_url: env::var("API_BASE_URL").unwrap_or(defaults.api_base_url),
            events_path: env::var("EVENTS_PATH").unwrap_or(defaults.events_path),
            login_path: env::var("LOGIN_PATH").unwrap_or(defaults.login_path),
            timezone: env::var("TIMEZONE").unwrap_or(defaults.timezone),
            login_mode,
            request_timeout_secs,
        })
    }

    /// Override fields with the keys present in a TOML document
    pub fn apply_toml_str(&mut self, text: &str) -> AppResult<()> {
        let overrides: FileOverrides = toml::from_str(text)?;

        if let Some(value) = overrides.api_base_url {
            self.api_base_url = value;
        }
        if let Some(value) = overrides.events_path {
            self.events_path = value;
        }
        if let Some(value) = overrides.login_path {
            self.login_path = value;
        }
        if let Some(value) = overrides.timezone {
            self.timezone = value;
        }
        if let Some(value) = overrides.login_mode {
            self.login_mode = value;
        }
        if overrides.request_timeout_secs.is_some() {
            self.request_timeout_secs = overrides.request_timeout_secs;
        }

        Ok(())
    }

    /// Check that the URLs and the timezone parse
    pub fn validate(&self) -> AppResult<()> {
        self.events_url()?;
        self.login_url()?;
        self.timezone()?;
        Ok(())
    }

    /// Full URL of the events endpoint
    pub fn events_url(&self) -> AppResult<Url> {
        self.join(&self.events_path)
    }

    /// Full URL of the login endpoint
    pub fn login_url(&self) -> AppResult<Url> {
        self.join(&self.login_path)
    }

    /// Configured timezone
    pub fn timezone(&self) -> AppResult<Tz> {
        parse_timezone(&self.timezone)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    fn join(&self, path: &str) -> AppResult<Url> {
        let base = Url::parse(&self.api_base_url).map_err(|e| {
            config_error(&format!(
                "Invalid API base URL '{}': {}",
                self.api_base_url, e
            ))
        })?;
        base.join(path)
            .map_err(|e| config_error(&format!("Invalid path '{}': {}", path, e)))
    }
}
