//! Account management endpoints.

use serde_json::Value;

use crate::Result;
use crate::models::account::{Account, AccountBalances, CreateAccountRequest};
use crate::models::{ListParams, Page, decode, decode_data};
use crate::transport::Transport;

/// Methods under `/accounts`.
#[derive(Debug, Clone, Copy)]
pub struct Accounts<'a> {
    pub(crate) transport: &'a Transport,
}

impl Accounts<'_> {
    /// `GET /accounts`
    pub async fn list(&self, params: ListParams) -> Result<Page<Account>> {
        decode(self.transport.get_query("/accounts", &params).await?)
    }

    /// `POST /accounts`
    pub async fn create(&self, request: &CreateAccountRequest) -> Result<Account> {
        let body = serde_json::to_value(request)?;
        decode_data(self.transport.post("/accounts", &body).await?)
    }

    /// `GET /accounts/{uuid}`
    pub async fn get(&self, uuid: &str) -> Result<Account> {
        decode_data(self.transport.get(&format!("/accounts/{uuid}")).await?)
    }

    /// `DELETE /accounts/{uuid}`
    pub async fn delete(&self, uuid: &str) -> Result<()> {
        self.transport.delete(&format!("/accounts/{uuid}")).await?;
        Ok(())
    }

    /// `POST /accounts/{uuid}/freeze`
    ///
    /// Returns the server's acknowledgement; the response carries a message
    /// rather than the updated account.
    pub async fn freeze(&self, uuid: &str) -> Result<Value> {
        self.transport
            .post_empty(&format!("/accounts/{uuid}/freeze"))
            .await
    }

    /// `POST /accounts/{uuid}/unfreeze`
    pub async fn unfreeze(&self, uuid: &str) -> Result<Value> {
        self.transport
            .post_empty(&format!("/accounts/{uuid}/unfreeze"))
            .await
    }

    /// `GET /accounts/{uuid}/balances`
    pub async fn balances(&self, uuid: &str) -> Result<AccountBalances> {
        decode_data(
            self.transport
                .get(&format!("/accounts/{uuid}/balances"))
                .await?,
        )
    }
}
