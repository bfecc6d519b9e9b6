//! Authenticated HTTP session shared by every resource facade.
//!
//! [`Transport`] owns the reqwest client and the immutable session
//! configuration. It attaches the bearer token and standard headers, retries
//! a fixed set of transient statuses on idempotent methods with exponential
//! backoff, and funnels every non-2xx response through the error classifier.

use std::time::Duration;

use reqwest::{Client, Method, StatusCode, header};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{Result, classify};

/// Versioned user agent sent with every request.
const USER_AGENT: &str = concat!("finaegis-rust/", env!("CARGO_PKG_VERSION"));

/// Statuses worth retrying: rate limiting and transient server failures.
const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// The authenticated HTTP session. Cheap to share by reference; holds no
/// mutable state after construction, so concurrent calls are safe.
#[derive(Debug)]
pub struct Transport {
    http: Client,
    base_url: String,
    api_key: String,
    max_retries: u32,
    backoff_base: Duration,
}

impl Transport {
    /// Builds the session from an already-validated [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`FinAegisError::Transport`](crate::FinAegisError::Transport)
    /// if the underlying HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            max_retries: config.max_retries,
            backoff_base: config.backoff_base,
        })
    }

    /// Base URL all paths are joined to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues one API call and returns the parsed JSON body.
    ///
    /// A 2xx response with an empty body yields an empty JSON object.
    /// Retryable statuses on GET/PUT/DELETE are re-issued up to the
    /// configured maximum with exponential backoff; every other non-2xx
    /// outcome is classified and returned as an error. Connection failures
    /// and timeouts surface as `Transport` errors without classification.
    pub async fn request<Q: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = join_url(&self.base_url, path);
        let mut attempt: u32 = 0;

        loop {
            let mut request = self
                .http
                .request(method.clone(), &url)
                .bearer_auth(&self.api_key)
                .header(header::ACCEPT, "application/json");
            if let Some(query) = query {
                request = request.query(query);
            }
            if let Some(body) = body {
                request = request.json(body);
            }

            debug!(%method, %url, attempt, "issuing request");
            let response = request.send().await?;
            let status = response.status();

            if status.is_success() {
                let text = response.text().await?;
                if text.trim().is_empty() {
                    return Ok(Value::Object(serde_json::Map::new()));
                }
                return Ok(serde_json::from_str(&text)?);
            }

            if is_retryable_status(status) && is_retryable_method(&method) && attempt < self.max_retries {
                let delay = backoff_delay(self.backoff_base, attempt);
                warn!(
                    status = status.as_u16(),
                    delay_ms = delay.as_millis() as u64,
                    attempt,
                    "transient failure, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }

            let body_text = response.text().await.unwrap_or_default();
            return Err(classify(status, &body_text));
        }
    }

    /// GET without query parameters.
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.request::<()>(Method::GET, path, None, None).await
    }

    /// GET with serializable query parameters.
    pub async fn get_query<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<Value> {
        self.request(Method::GET, path, Some(query), None).await
    }

    /// POST with a JSON body.
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.request::<()>(Method::POST, path, None, Some(body)).await
    }

    /// POST without a body (action endpoints like freeze/refresh).
    pub async fn post_empty(&self, path: &str) -> Result<Value> {
        self.request::<()>(Method::POST, path, None, None).await
    }

    /// PUT with a JSON body.
    pub async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        self.request::<()>(Method::PUT, path, None, Some(body)).await
    }

    /// DELETE without a body.
    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.request::<()>(Method::DELETE, path, None, None).await
    }
}

/// Joins a relative path to the base URL by concatenation.
fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url, path.trim_start_matches('/'))
}

/// Returns true for statuses in the retryable table.
fn is_retryable_status(status: StatusCode) -> bool {
    RETRYABLE_STATUSES.contains(&status.as_u16())
}

/// Only methods the server treats as safe to repeat are retried. POST is
/// deliberately excluded: replaying a deposit or transfer without an
/// idempotency key can move money twice.
fn is_retryable_method(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::PUT | Method::DELETE)
}

/// Exponential backoff: `base * 2^attempt`.
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base.saturating_mul(2u32.saturating_pow(attempt))
}
