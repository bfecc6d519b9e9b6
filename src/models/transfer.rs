//! Transfer models: account-to-account movements.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::transaction::TransactionStatus;

/// A movement between two accounts.
#[derive(Debug, Clone, Deserialize)]
pub struct Transfer {
    pub uuid: String,
    pub from_account_uuid: String,
    pub to_account_uuid: String,
    pub amount: Decimal,
    pub asset_code: String,
    #[serde(default)]
    pub reference: Option<String>,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
    /// Present only once `status` is terminal.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Body for `POST /transfers`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTransferRequest {
    pub from_account_uuid: String,
    pub to_account_uuid: String,
    /// Amount in minor units (cents).
    pub amount: i64,
    pub asset_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}
