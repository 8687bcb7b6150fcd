use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the carousel
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(event_carousel::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(event_carousel::config),
        help("Set EVENTS_ENDPOINT or events_endpoint in config/carousel.toml to an http(s) URL")
    )]
    Config(String),

    #[error("Event fetch error: {0}")]
    #[diagnostic(code(event_carousel::fetch))]
    Fetch(String),

    #[error("Component error: {0}")]
    #[diagnostic(code(event_carousel::component))]
    Component(String),

    #[error("Input error: {0}")]
    #[diagnostic(code(event_carousel::input))]
    Input(String),

    #[error(transparent)]
    #[diagnostic(code(event_carousel::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(event_carousel::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(event_carousel::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for template rendering errors
impl From<askama::Error> for Error {
    fn from(err: askama::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type CarouselResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Invalid environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create event fetch errors
pub fn fetch_error(message: &str) -> Error {
    Error::Fetch(message.to_string())
}

/// Helper to create component errors
pub fn component_error(message: &str) -> Error {
    Error::Component(message.to_string())
}

/// Helper to create input errors
pub fn input_error(message: &str) -> Error {
    Error::Input(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
