//! Crate-level error types and HTTP error classification.
//!
//! [`FinAegisError`] unifies every error source (configuration, transport,
//! JSON, API rejections) behind a single enum so callers can match on the
//! variant they care about while still using the `?` operator for easy
//! propagation. API rejections are produced by [`classify`], a pure function
//! from an HTTP status code plus response body to the matching variant.

use std::collections::HashMap;
use std::fmt;

use reqwest::StatusCode;
use serde_json::Value;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FinAegisError>;

/// Message used for every 401, regardless of what the server sent.
const UNAUTHORIZED_MESSAGE: &str = "Invalid API key, check your FINAEGIS_API_KEY";

/// Context attached to every classified API error: the server's message,
/// the original status code, and the parsed response body (an empty JSON
/// object when the body was not valid JSON).
#[derive(Debug, Clone)]
pub struct ApiErrorContext {
    pub message: String,
    pub status: u16,
    pub body: Value,
}

impl fmt::Display for ApiErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (status {})", self.message, self.status)
    }
}

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum FinAegisError {
    /// The client was constructed with an invalid or missing API key,
    /// or otherwise unusable configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP request never produced a server response (connection
    /// refused, DNS failure, TLS failure, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response body was not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A 2xx response parsed as JSON but did not match the expected
    /// entity shape (e.g. a required field was missing).
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// 401 or 403: the API rejected the request's credentials.
    #[error("authentication failed: {0}")]
    Authentication(ApiErrorContext),

    /// 404: the addressed resource does not exist.
    #[error("not found: {0}")]
    NotFound(ApiErrorContext),

    /// 422: the request was understood but failed server-side validation.
    /// `errors` maps field names to the messages reported for them.
    #[error("validation failed: {context}")]
    Validation {
        context: ApiErrorContext,
        errors: HashMap<String, Vec<String>>,
    },

    /// 429: the caller exceeded a rate limit. `retry_after` is the
    /// server's suggested wait in seconds, when it sent one.
    #[error("rate limited: {context}")]
    RateLimit {
        context: ApiErrorContext,
        retry_after: Option<u64>,
    },

    /// Any 5xx response.
    #[error("server error: {0}")]
    Server(ApiErrorContext),

    /// Any other non-2xx response not covered above.
    #[error("api error: {0}")]
    Api(ApiErrorContext),
}

impl FinAegisError {
    /// Returns the HTTP status code for classified API errors,
    /// `None` for configuration, transport, and decode errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication(c)
            | Self::NotFound(c)
            | Self::Server(c)
            | Self::Api(c)
            | Self::Validation { context: c, .. }
            | Self::RateLimit { context: c, .. } => Some(c.status),
            _ => None,
        }
    }

    /// True for 429 responses, so callers can branch and wait.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimit { .. })
    }
}

/// Classifies a non-2xx response into the matching [`FinAegisError`] variant.
///
/// The message is taken from the body's `message` field when present, else
/// the status's canonical reason phrase, else a generic `HTTP <code> error`.
/// Retries are exhausted by the transport before this is called; this
/// function has no retry interaction of its own.
pub fn classify(status: StatusCode, body: &str) -> FinAegisError {
    let body: Value =
        serde_json::from_str(body).unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {} error", status.as_u16()));

    let context = ApiErrorContext {
        message,
        status: status.as_u16(),
        body,
    };

    match status.as_u16() {
        401 => FinAegisError::Authentication(ApiErrorContext {
            message: UNAUTHORIZED_MESSAGE.to_string(),
            ..context
        }),
        403 => FinAegisError::Authentication(context),
        404 => FinAegisError::NotFound(context),
        422 => {
            let errors = field_errors(&context.body);
            FinAegisError::Validation { context, errors }
        }
        429 => {
            let retry_after = context.body.get("retry_after").and_then(Value::as_u64);
            FinAegisError::RateLimit {
                context,
                retry_after,
            }
        }
        500..=599 => FinAegisError::Server(context),
        _ => FinAegisError::Api(context),
    }
}

/// Extracts the `errors` map from a 422 body: field name to list of messages.
fn field_errors(body: &Value) -> HashMap<String, Vec<String>> {
    let Some(errors) = body.get("errors").and_then(Value::as_object) else {
        return HashMap::new();
    };

    errors
        .iter()
        .map(|(field, messages)| {
            let messages = messages
                .as_array()
                .map(|list| {
                    list.iter()
                        .filter_map(|m| m.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default();
            (field.clone(), messages)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> StatusCode {
        StatusCode::from_u16(code).unwrap()
    }

    #[test]
    fn unauthorized_forces_fixed_message() {
        let err = classify(status(401), r#"{"message":"token expired"}"#);
        match err {
            FinAegisError::Authentication(context) => {
                assert_eq!(context.message, UNAUTHORIZED_MESSAGE);
                assert_eq!(context.status, 401);
                assert_eq!(context.body["message"], "token expired");
            }
            other => panic!("expected Authentication, got {other:?}"),
        }
    }

    #[test]
    fn forbidden_preserves_body_message() {
        let err = classify(status(403), r#"{"message":"account suspended"}"#);
        match err {
            FinAegisError::Authentication(context) => {
                assert_eq!(context.message, "account suspended");
                assert_eq!(context.status, 403);
            }
            other => panic!("expected Authentication, got {other:?}"),
        }
    }

    #[test]
    fn not_found_maps_to_dedicated_variant() {
        let err = classify(status(404), "");
        assert!(matches!(err, FinAegisError::NotFound(_)));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn validation_carries_field_errors() {
        let err = classify(status(422), r#"{"errors":{"name":["required"]}}"#);
        match err {
            FinAegisError::Validation { errors, .. } => {
                assert_eq!(errors["name"], vec!["required".to_string()]);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn rate_limit_carries_retry_after_hint() {
        let err = classify(status(429), r#"{"message":"slow down","retry_after":30}"#);
        assert!(err.is_rate_limited());
        match err {
            FinAegisError::RateLimit {
                context,
                retry_after,
            } => {
                assert_eq!(context.message, "slow down");
                assert_eq!(retry_after, Some(30));
            }
            other => panic!("expected RateLimit, got {other:?}"),
        }
    }

    #[test]
    fn rate_limit_without_hint() {
        let err = classify(status(429), "{}");
        match err {
            FinAegisError::RateLimit { retry_after, .. } => assert_eq!(retry_after, None),
            other => panic!("expected RateLimit, got {other:?}"),
        }
    }

    #[test]
    fn five_hundreds_map_to_server() {
        for code in [500, 502, 503, 504] {
            let err = classify(status(code), "");
            assert!(matches!(err, FinAegisError::Server(_)), "code {code}");
            assert_eq!(err.status(), Some(code));
        }
    }

    #[test]
    fn unmapped_codes_fall_back_to_generic() {
        let err = classify(status(418), "");
        match err {
            FinAegisError::Api(context) => {
                assert_eq!(context.status, 418);
                assert_eq!(context.message, "I'm a teapot");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn unparsable_body_yields_empty_map_and_reason_phrase() {
        let err = classify(status(503), "<html>gateway</html>");
        match err {
            FinAegisError::Server(context) => {
                assert_eq!(context.message, "Service Unavailable");
                assert_eq!(context.body, serde_json::json!({}));
            }
            other => panic!("expected Server, got {other:?}"),
        }
    }

    #[test]
    fn missing_reason_phrase_falls_back_to_generic_text() {
        let err = classify(status(599), "");
        match err {
            FinAegisError::Server(context) => assert_eq!(context.message, "HTTP 599 error"),
            other => panic!("expected Server, got {other:?}"),
        }
    }

    #[test]
    fn validation_with_malformed_errors_key_is_empty() {
        let err = classify(status(422), r#"{"errors":"oops"}"#);
        match err {
            FinAegisError::Validation { errors, .. } => assert!(errors.is_empty()),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
