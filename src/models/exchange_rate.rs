//! Exchange rate models. The directional pair is the identity.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// One directional exchange rate.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRate {
    pub from_asset: String,
    pub to_asset: String,
    pub rate: Decimal,
    pub updated_at: DateTime<Utc>,
}

/// Result of `GET /exchange-rates/{from}/{to}/convert`.
#[derive(Debug, Clone, Deserialize)]
pub struct Conversion {
    pub from_asset: String,
    pub to_asset: String,
    /// Input amount in minor units, echoed back by the server.
    pub amount: i64,
    pub converted: Decimal,
    pub rate: Decimal,
}
