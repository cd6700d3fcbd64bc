//! Application configuration loaded once at process start.
//!
//! All values come from environment variables. Credentials end up in
//! an explicit immutable [`AuthConfig`] handed to the auth middleware
//! at construction; nothing reads ambient global state afterwards.

use std::env;
use thiserror::Error;

/// Default HTTP bind host.
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default HTTP bind port.
const DEFAULT_PORT: u16 = 8080;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),

    /// An environment variable holds an unusable value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// The environment variable name.
        key: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

/// The static credential pair every request must present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    username: String,
    password: String,
}

impl AuthConfig {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns `true` when the supplied credentials match the
    /// configured pair exactly.
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Host address for the HTTP server.
    pub host: String,
    /// Port number for the HTTP server.
    pub port: u16,
    /// Static basic-auth credentials.
    pub auth: AuthConfig,
    /// `PostgreSQL` connection URL. When unset the server falls back
    /// to the in-memory stores.
    pub database_url: Option<String>,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// `APP_AUTH_USERNAME` and `APP_AUTH_PASSWORD` are required;
    /// `APP_HOST` and `APP_PORT` fall back to `0.0.0.0:8080`;
    /// `DATABASE_URL` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or
    /// the port is not a valid number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_owned());
        let port = match env::var("APP_PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };
        let username =
            env::var("APP_AUTH_USERNAME").map_err(|_| ConfigError::MissingVar("APP_AUTH_USERNAME"))?;
        let password =
            env::var("APP_AUTH_PASSWORD").map_err(|_| ConfigError::MissingVar("APP_AUTH_PASSWORD"))?;
        let database_url = env::var("DATABASE_URL").ok();

        Ok(Self {
            host,
            port,
            auth: AuthConfig::new(username, password),
            database_url,
        })
    }

    /// Returns the socket address string the server binds to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        key: "APP_PORT",
        message: format!("expected a port number, got '{raw}'"),
    })
}
