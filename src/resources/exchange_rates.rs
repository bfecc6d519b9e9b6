//! Exchange rate endpoints.

use serde::Serialize;
use serde_json::Value;

use crate::Result;
use crate::models::exchange_rate::{Conversion, ExchangeRate};
use crate::models::{ListParams, Page, decode, decode_data};
use crate::transport::Transport;

#[derive(Serialize)]
struct ConvertParams {
    amount: i64,
}

/// Methods under `/exchange-rates`.
#[derive(Debug, Clone, Copy)]
pub struct ExchangeRates<'a> {
    pub(crate) transport: &'a Transport,
}

impl ExchangeRates<'_> {
    /// `GET /exchange-rates`
    pub async fn list(&self, params: ListParams) -> Result<Page<ExchangeRate>> {
        decode(self.transport.get_query("/exchange-rates", &params).await?)
    }

    /// `GET /exchange-rates/{from}/{to}`
    pub async fn get(&self, from: &str, to: &str) -> Result<ExchangeRate> {
        decode_data(
            self.transport
                .get(&format!("/exchange-rates/{from}/{to}"))
                .await?,
        )
    }

    /// `GET /exchange-rates/{from}/{to}/convert` — converts `amount` minor
    /// units of `from` into `to`.
    pub async fn convert(&self, from: &str, to: &str, amount: i64) -> Result<Conversion> {
        decode_data(
            self.transport
                .get_query(
                    &format!("/exchange-rates/{from}/{to}/convert"),
                    &ConvertParams { amount },
                )
                .await?,
        )
    }

    /// `POST /exchange-rates/refresh` — asks the server to refresh its rate
    /// feeds.
    pub async fn refresh(&self) -> Result<Value> {
        self.transport.post_empty("/exchange-rates/refresh").await
    }
}
