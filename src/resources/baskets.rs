//! Basket endpoints: definitions, valuation, and account compose/decompose.

use serde_json::Value;

use crate::Result;
use crate::models::basket::{Basket, BasketUnitsRequest, CreateBasketRequest};
use crate::models::{ListParams, Page, decode, decode_data};
use crate::transport::Transport;

/// Methods under `/baskets` (plus basket operations on accounts).
#[derive(Debug, Clone, Copy)]
pub struct Baskets<'a> {
    pub(crate) transport: &'a Transport,
}

impl Baskets<'_> {
    /// `GET /baskets`
    pub async fn list(&self, params: ListParams) -> Result<Page<Basket>> {
        decode(self.transport.get_query("/baskets", &params).await?)
    }

    /// `GET /baskets/{code}`
    pub async fn get(&self, code: &str) -> Result<Basket> {
        decode_data(self.transport.get(&format!("/baskets/{code}")).await?)
    }

    /// `POST /baskets`
    pub async fn create(&self, request: &CreateBasketRequest) -> Result<Basket> {
        let body = serde_json::to_value(request)?;
        decode_data(self.transport.post("/baskets", &body).await?)
    }

    /// `GET /baskets/{code}/value` — current valuation; shape varies by
    /// basket so it stays untyped.
    pub async fn value(&self, code: &str) -> Result<Value> {
        self.transport.get(&format!("/baskets/{code}/value")).await
    }

    /// `GET /baskets/{code}/history`
    pub async fn history(&self, code: &str, params: ListParams) -> Result<Value> {
        self.transport
            .get_query(&format!("/baskets/{code}/history"), &params)
            .await
    }

    /// `GET /baskets/{code}/performance`
    pub async fn performance(&self, code: &str) -> Result<Value> {
        self.transport
            .get(&format!("/baskets/{code}/performance"))
            .await
    }

    /// `POST /baskets/{code}/rebalance`
    pub async fn rebalance(&self, code: &str) -> Result<Value> {
        self.transport
            .post_empty(&format!("/baskets/{code}/rebalance"))
            .await
    }

    /// `GET /accounts/{uuid}/baskets` — basket holdings of one account.
    pub async fn holdings(&self, account_uuid: &str) -> Result<Value> {
        self.transport
            .get(&format!("/accounts/{account_uuid}/baskets"))
            .await
    }

    /// `POST /accounts/{uuid}/baskets/compose` — exchange account funds
    /// into basket units.
    pub async fn compose(&self, account_uuid: &str, request: &BasketUnitsRequest) -> Result<Value> {
        let body = serde_json::to_value(request)?;
        self.transport
            .post(&format!("/accounts/{account_uuid}/baskets/compose"), &body)
            .await
    }

    /// `POST /accounts/{uuid}/baskets/decompose` — break basket units back
    /// into their constituent assets.
    pub async fn decompose(
        &self,
        account_uuid: &str,
        request: &BasketUnitsRequest,
    ) -> Result<Value> {
        let body = serde_json::to_value(request)?;
        self.transport
            .post(
                &format!("/accounts/{account_uuid}/baskets/decompose"),
                &body,
            )
            .await
    }
}
