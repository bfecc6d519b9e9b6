//! Client configuration: deployment environments, base URLs, credentials.
//!
//! The API key **must** be provided either explicitly or via the
//! `FINAEGIS_API_KEY` environment variable. Construction fails before any
//! network activity when the key is absent or empty.

use std::time::Duration;

use crate::{FinAegisError, Result};

/// Environment variable consulted when no explicit API key is given.
pub const API_KEY_ENV: &str = "FINAEGIS_API_KEY";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default maximum number of automatic retries for retryable failures.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default base delay for exponential backoff between retries.
pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_secs(1);

/// Named FinAegis deployments, each with a fixed base URL.
///
/// The mapping is resolved at construction time into
/// [`ClientConfig::base_url`]; there is no process-wide mutable table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
    Local,
}

impl Environment {
    /// Returns the base URL all request paths are joined to.
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => "https://api.finaegis.com/v2",
            Environment::Sandbox => "https://sandbox.finaegis.com/v2",
            Environment::Local => "http://localhost:8000/api/v2",
        }
    }
}

/// Immutable session configuration fixed at client construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    pub max_retries: u32,
    pub backoff_base: Duration,
}

impl ClientConfig {
    /// Creates a production configuration with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns [`FinAegisError::Config`] when the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::for_environment(Environment::Production, api_key)
    }

    /// Creates a configuration for a named deployment environment.
    ///
    /// # Errors
    ///
    /// Returns [`FinAegisError::Config`] when the key is empty.
    pub fn for_environment(environment: Environment, api_key: impl Into<String>) -> Result<Self> {
        Self::build(environment.base_url(), api_key.into())
    }

    /// Creates a production configuration with the API key taken from
    /// the `FINAEGIS_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`FinAegisError::Config`] when the variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_env_for(Environment::Production)
    }

    /// Like [`ClientConfig::from_env`], for a specific environment.
    pub fn from_env_for(environment: Environment) -> Result<Self> {
        let api_key = non_empty_var(API_KEY_ENV).ok_or_else(|| {
            FinAegisError::Config(format!(
                "no API key: pass one explicitly or set {API_KEY_ENV}"
            ))
        })?;
        Self::build(environment.base_url(), api_key)
    }

    fn build(base_url: &str, api_key: String) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(FinAegisError::Config(format!(
                "no API key: pass one explicitly or set {API_KEY_ENV}"
            )));
        }
        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base: DEFAULT_BACKOFF_BASE,
        })
    }

    /// Overrides the base URL (e.g. a self-hosted deployment).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the maximum number of automatic retries.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Overrides the base delay for exponential backoff.
    #[must_use]
    pub fn with_backoff_base(mut self, backoff_base: Duration) -> Self {
        self.backoff_base = backoff_base;
        self
    }
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
