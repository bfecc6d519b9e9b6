//! Transaction models: deposits and withdrawals against one account.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a transaction moved money in or out of the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

/// Lifecycle of a transaction or transfer. `Completed` and `Failed` are
/// terminal: only then is `completed_at` present and the record final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl TransactionStatus {
    /// True once the record can no longer change.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// A deposit or withdrawal on a single account.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    pub uuid: String,
    pub account_uuid: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub asset_code: String,
    pub status: TransactionStatus,
    #[serde(default)]
    pub reference: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Present only once `status` is terminal.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Body for `POST /accounts/{uuid}/deposit` and `.../withdraw`.
#[derive(Debug, Clone, Serialize)]
pub struct MoneyRequest {
    /// Amount in minor units (cents).
    pub amount: i64,
    pub asset_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl MoneyRequest {
    #[must_use]
    pub fn new(amount: i64, asset_code: impl Into<String>) -> Self {
        Self {
            amount,
            asset_code: asset_code.into(),
            reference: None,
        }
    }

    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}
