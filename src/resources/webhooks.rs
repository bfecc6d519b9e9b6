//! Webhook configuration endpoints.

use serde_json::Value;

use crate::Result;
use crate::models::webhook::{CreateWebhookRequest, UpdateWebhookRequest, Webhook};
use crate::models::{ListParams, Page, decode, decode_data};
use crate::transport::Transport;

/// Methods under `/webhooks`.
#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a> {
    pub(crate) transport: &'a Transport,
}

impl Webhooks<'_> {
    /// `GET /webhooks`
    pub async fn list(&self, params: ListParams) -> Result<Page<Webhook>> {
        decode(self.transport.get_query("/webhooks", &params).await?)
    }

    /// `GET /webhooks/{uuid}`
    pub async fn get(&self, uuid: &str) -> Result<Webhook> {
        decode_data(self.transport.get(&format!("/webhooks/{uuid}")).await?)
    }

    /// `POST /webhooks`
    pub async fn create(&self, request: &CreateWebhookRequest) -> Result<Webhook> {
        let body = serde_json::to_value(request)?;
        decode_data(self.transport.post("/webhooks", &body).await?)
    }

    /// `PUT /webhooks/{uuid}`
    pub async fn update(&self, uuid: &str, request: &UpdateWebhookRequest) -> Result<Webhook> {
        let body = serde_json::to_value(request)?;
        decode_data(
            self.transport
                .put(&format!("/webhooks/{uuid}"), &body)
                .await?,
        )
    }

    /// `DELETE /webhooks/{uuid}`
    pub async fn delete(&self, uuid: &str) -> Result<()> {
        self.transport.delete(&format!("/webhooks/{uuid}")).await?;
        Ok(())
    }

    /// `GET /webhooks/{uuid}/deliveries` — recent delivery attempts.
    pub async fn deliveries(&self, uuid: &str, params: ListParams) -> Result<Value> {
        self.transport
            .get_query(&format!("/webhooks/{uuid}/deliveries"), &params)
            .await
    }

    /// `GET /webhooks/events` — event names available for subscription.
    pub async fn events(&self) -> Result<Value> {
        self.transport.get("/webhooks/events").await
    }
}
