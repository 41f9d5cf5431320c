// src/config.rs
use std::{env, net::SocketAddr, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: SocketAddr,
    allowed_origins: Vec<String>,
    cors_max_age: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

const fn default_cors_max_age_secs() -> u64 {
    3600
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `LISTEN_ADDR` is not a socket
    /// address or `CORS_MAX_AGE_SECONDS` is not an integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let allowed_origins = env::var("ALLOWED_ORIGINS").ok();
        let cors_max_age = env::var("CORS_MAX_AGE_SECONDS").ok();

        Self::from_parts(
            &listen_addr,
            allowed_origins.as_deref(),
            cors_max_age.as_deref(),
        )
    }

    /// Build configuration from raw values as they appear in the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `listen_addr` is not a socket
    /// address or `cors_max_age_secs` is not an integer.
    pub fn from_parts(
        listen_addr: &str,
        allowed_origins: Option<&str>,
        cors_max_age_secs: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let listen_addr = listen_addr.parse::<SocketAddr>().map_err(|err| {
            ConfigError::Invalid(format!("LISTEN_ADDR '{listen_addr}' is not a socket address: {err}"))
        })?;

        let allowed_origins = allowed_origins
            .map(parse_origins)
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_allowed_origins);

        let cors_max_age_secs = match cors_max_age_secs {
            Some(raw) => raw.trim().parse::<u64>().map_err(|err| {
                ConfigError::Invalid(format!("CORS_MAX_AGE_SECONDS '{raw}' is not an integer: {err}"))
            })?,
            None => default_cors_max_age_secs(),
        };

        Ok(Self {
            listen_addr,
            allowed_origins,
            cors_max_age: Duration::from_secs(cors_max_age_secs),
        })
    }

    #[must_use]
    pub const fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    /// Allowed CORS origins; a `*` entry allows any origin.
    #[must_use]
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    #[must_use]
    pub const fn cors_max_age(&self) -> Duration {
        self.cors_max_age
    }

    /// Copy of this configuration with a different origin list.
    #[must_use]
    pub fn with_allowed_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_origins = origins.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            allowed_origins: default_allowed_origins(),
            cors_max_age: Duration::from_secs(default_cors_max_age_secs()),
        }
    }
}
