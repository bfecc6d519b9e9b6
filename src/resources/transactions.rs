//! Deposit, withdrawal, and transaction history endpoints.

use crate::Result;
use crate::models::transaction::{MoneyRequest, Transaction};
use crate::models::{ListParams, Page, decode, decode_data};
use crate::transport::Transport;

/// Transaction methods, all scoped to one account.
#[derive(Debug, Clone, Copy)]
pub struct Transactions<'a> {
    pub(crate) transport: &'a Transport,
}

impl Transactions<'_> {
    /// `POST /accounts/{uuid}/deposit`
    ///
    /// Not retried automatically: replaying a deposit without an
    /// idempotency key could credit the account twice.
    pub async fn deposit(&self, account_uuid: &str, request: &MoneyRequest) -> Result<Transaction> {
        let body = serde_json::to_value(request)?;
        decode_data(
            self.transport
                .post(&format!("/accounts/{account_uuid}/deposit"), &body)
                .await?,
        )
    }

    /// `POST /accounts/{uuid}/withdraw`
    pub async fn withdraw(
        &self,
        account_uuid: &str,
        request: &MoneyRequest,
    ) -> Result<Transaction> {
        let body = serde_json::to_value(request)?;
        decode_data(
            self.transport
                .post(&format!("/accounts/{account_uuid}/withdraw"), &body)
                .await?,
        )
    }

    /// `GET /accounts/{uuid}/transactions`
    pub async fn history(
        &self,
        account_uuid: &str,
        params: ListParams,
    ) -> Result<Page<Transaction>> {
        decode(
            self.transport
                .get_query(&format!("/accounts/{account_uuid}/transactions"), &params)
                .await?,
        )
    }
}
