//! Ledger account models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A ledger account.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub uuid: String,
    /// Owning user's identifier.
    pub user_uuid: String,
    pub name: String,
    /// Accepted as a JSON number or string on the wire.
    pub balance: Decimal,
    #[serde(default)]
    pub frozen: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for `POST /accounts`. Only supplied fields are serialized.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAccountRequest {
    pub user_uuid: String,
    pub name: String,
    /// Opening balance in minor units (cents).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_balance: Option<i64>,
}

/// Per-asset balances of one account, from `GET /accounts/{uuid}/balances`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountBalances {
    pub account_uuid: String,
    pub balances: Vec<AssetBalance>,
    /// Server-computed aggregate (asset count, USD equivalent); shape is
    /// not stable so it stays untyped.
    #[serde(default)]
    pub summary: Option<Value>,
}

/// One asset's balance within an account.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetBalance {
    pub asset_code: String,
    pub balance: Decimal,
    #[serde(default)]
    pub formatted: Option<String>,
}
