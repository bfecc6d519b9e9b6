//! Global Currency Unit (GCU) models: the composite index whose value
//! derives from a weighted basket of other assets.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::asset::AssetType;

/// Aggregate view of the GCU index, from `GET /gcu`.
#[derive(Debug, Clone, Deserialize)]
pub struct GcuInfo {
    /// Basket code backing the index (e.g. `"GCU"`).
    pub code: String,
    pub name: String,
    pub total_value: Decimal,
    /// Constituents in server order.
    pub composition: Vec<GcuComposition>,
    pub updated_at: DateTime<Utc>,
}

/// One constituent of the GCU basket. Embedded list entry, not
/// independently addressable.
#[derive(Debug, Clone, Deserialize)]
pub struct GcuComposition {
    pub asset_code: String,
    pub asset_name: String,
    pub asset_type: AssetType,
    pub weight: Decimal,
    pub current_price: Decimal,
    /// This constituent's contribution to the basket value.
    pub value_contribution: Decimal,
    pub percentage: Decimal,
    #[serde(default)]
    pub change_24h: Option<Decimal>,
    #[serde(default)]
    pub change_7d: Option<Decimal>,
}
