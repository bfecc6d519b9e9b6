//! Typed entities for every FinAegis resource family, plus the shared
//! pagination envelope.
//!
//! All entities are immutable value records populated from server responses.
//! Decoding is schema-validated: a required field missing from the payload is
//! a hard [`MalformedResponse`](crate::FinAegisError::MalformedResponse)
//! failure, and optional fields map to `Option`, never to a default business
//! value.

pub mod account;
pub mod asset;
pub mod basket;
pub mod exchange_rate;
pub mod gcu;
pub mod transaction;
pub mod transfer;
pub mod webhook;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::{FinAegisError, Result};

/// One page of a listing endpoint, reconstructed from the `{data, meta}`
/// envelope every list endpoint uses.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: PageMeta,
}

/// Pagination metadata. Individual keys (or the whole `meta` object) may be
/// absent in partial server responses and fall back to fixed defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    #[serde(default = "default_current_page")]
    pub current_page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "default_last_page")]
    pub last_page: u32,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            current_page: 1,
            per_page: 20,
            total: 0,
            last_page: 1,
        }
    }
}

fn default_current_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

fn default_last_page() -> u32 {
    1
}

/// `page`/`per_page` query parameters accepted by every listing endpoint.
/// Omitted values are not sent, leaving the choice to the server.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl ListParams {
    /// Requests a specific page with the server's default page size.
    #[must_use]
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: None,
        }
    }

    /// Sets the page size.
    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

/// Decodes a JSON value into a typed entity, mapping shape mismatches
/// (missing required fields, wrong types) to `MalformedResponse`.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| FinAegisError::MalformedResponse(e.to_string()))
}

/// Decodes a single-item response, unwrapping the `{"data": {...}}` envelope
/// when present. Action endpoints are not uniform about the envelope, so a
/// bare object is decoded as-is.
pub(crate) fn decode_data<T: DeserializeOwned>(mut value: Value) -> Result<T> {
    let inner = match value.get_mut("data") {
        Some(data) => data.take(),
        None => value,
    };
    decode(inner)
}
