//! Account-to-account transfer endpoints.

use crate::Result;
use crate::models::transfer::{CreateTransferRequest, Transfer};
use crate::models::{ListParams, Page, decode, decode_data};
use crate::transport::Transport;

/// Methods under `/transfers`.
#[derive(Debug, Clone, Copy)]
pub struct Transfers<'a> {
    pub(crate) transport: &'a Transport,
}

impl Transfers<'_> {
    /// `POST /transfers`
    pub async fn create(&self, request: &CreateTransferRequest) -> Result<Transfer> {
        let body = serde_json::to_value(request)?;
        decode_data(self.transport.post("/transfers", &body).await?)
    }

    /// `GET /transfers/{uuid}`
    pub async fn get(&self, uuid: &str) -> Result<Transfer> {
        decode_data(self.transport.get(&format!("/transfers/{uuid}")).await?)
    }

    /// `GET /accounts/{uuid}/transfers`
    pub async fn history(&self, account_uuid: &str, params: ListParams) -> Result<Page<Transfer>> {
        decode(
            self.transport
                .get_query(&format!("/accounts/{account_uuid}/transfers"), &params)
                .await?,
        )
    }
}
