//! Asset models. The asset code is the natural key used in paths.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Broad asset classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Fiat,
    Crypto,
    Commodity,
}

/// A supported asset.
#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    /// Number of decimal places in the asset's minor unit.
    pub precision: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

/// Body for `POST /assets`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAssetRequest {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub precision: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Body for `PUT /assets/{code}`. Only supplied fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAssetRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
