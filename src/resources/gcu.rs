//! Global Currency Unit endpoints.

use serde_json::Value;

use crate::Result;
use crate::models::decode_data;
use crate::models::gcu::{GcuComposition, GcuInfo};
use crate::transport::Transport;

/// Methods under `/gcu`.
#[derive(Debug, Clone, Copy)]
pub struct Gcu<'a> {
    pub(crate) transport: &'a Transport,
}

impl Gcu<'_> {
    /// `GET /gcu` — aggregate index information.
    pub async fn info(&self) -> Result<GcuInfo> {
        decode_data(self.transport.get("/gcu").await?)
    }

    /// `GET /gcu/composition` — current constituents with weights and
    /// contributions.
    pub async fn composition(&self) -> Result<Vec<GcuComposition>> {
        decode_data(self.transport.get("/gcu/composition").await?)
    }

    /// `GET /gcu/value-history`
    pub async fn value_history(&self) -> Result<Value> {
        self.transport.get("/gcu/value-history").await
    }

    /// `GET /gcu/governance/active-polls`
    pub async fn active_polls(&self) -> Result<Value> {
        self.transport.get("/gcu/governance/active-polls").await
    }

    /// `GET /gcu/supported-banks`
    pub async fn supported_banks(&self) -> Result<Value> {
        self.transport.get("/gcu/supported-banks").await
    }
}
