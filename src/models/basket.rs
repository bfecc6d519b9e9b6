//! Basket models: weighted compositions of other assets.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A currency basket. `composition` maps unique asset codes to weights;
/// weights are not validated client-side.
#[derive(Debug, Clone, Deserialize)]
pub struct Basket {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub composition: HashMap<String, Decimal>,
    /// Value expressed in the reference currency.
    pub value: Decimal,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

/// Body for `POST /baskets`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateBasketRequest {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub composition: HashMap<String, Decimal>,
}

/// Body for `POST /accounts/{uuid}/baskets/compose` and `.../decompose`:
/// exchange account funds into basket units or back.
#[derive(Debug, Clone, Serialize)]
pub struct BasketUnitsRequest {
    pub basket_code: String,
    /// Amount in minor units (cents).
    pub amount: i64,
}
