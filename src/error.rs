use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(eventageous::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(eventageous::config))]
    Config(String),

    #[error("Events request failed: {0}")]
    #[diagnostic(code(eventageous::events_request))]
    EventsRequest(#[from] reqwest::Error),

    #[error("Events endpoint answered with HTTP {status}")]
    #[diagnostic(code(eventageous::events_status))]
    EventsStatus { status: u16 },

    #[error("Malformed events response: {0}")]
    #[diagnostic(
        code(eventageous::malformed_events),
        help("expected {{\"data\": {{\"events\": [...], \"authed\": bool, \"email\": string}}}}")
    )]
    MalformedEvents(String),

    #[error("Events response uses the retired `data.items` envelope")]
    #[diagnostic(
        code(eventageous::legacy_envelope),
        help("the backend must serve `data.events`; upgrade the backend")
    )]
    LegacyEnvelope,

    #[error("Invalid date '{0}'")]
    #[diagnostic(code(eventageous::invalid_date))]
    InvalidDate(String),

    #[error("Invalid timezone '{0}'")]
    #[diagnostic(code(eventageous::invalid_timezone))]
    InvalidTimezone(String),

    #[error("Navigation to {url} failed: {reason}")]
    #[diagnostic(code(eventageous::navigation))]
    Navigation { url: String, reason: String },

    #[error("Template rendering failed: {0}")]
    #[diagnostic(code(eventageous::render))]
    Render(#[from] askama::Error),

    #[error("Component error: {0}")]
    #[diagnostic(code(eventageous::component))]
    Component(String),

    #[error(transparent)]
    #[diagnostic(code(eventageous::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(eventageous::serialization))]
    Serialization(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedEvents(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Invalid environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create component errors
pub fn component_error(message: &str) -> Error {
    Error::Component(message.to_string())
}
