//! Asset catalogue endpoints. Assets are addressed by code, not UUID.

use crate::Result;
use crate::models::asset::{Asset, CreateAssetRequest, UpdateAssetRequest};
use crate::models::{ListParams, Page, decode, decode_data};
use crate::transport::Transport;

/// Methods under `/assets`.
#[derive(Debug, Clone, Copy)]
pub struct Assets<'a> {
    pub(crate) transport: &'a Transport,
}

impl Assets<'_> {
    /// `GET /assets`
    pub async fn list(&self, params: ListParams) -> Result<Page<Asset>> {
        decode(self.transport.get_query("/assets", &params).await?)
    }

    /// `GET /assets/{code}`
    pub async fn get(&self, code: &str) -> Result<Asset> {
        decode_data(self.transport.get(&format!("/assets/{code}")).await?)
    }

    /// `POST /assets`
    pub async fn create(&self, request: &CreateAssetRequest) -> Result<Asset> {
        let body = serde_json::to_value(request)?;
        decode_data(self.transport.post("/assets", &body).await?)
    }

    /// `PUT /assets/{code}`
    pub async fn update(&self, code: &str, request: &UpdateAssetRequest) -> Result<Asset> {
        let body = serde_json::to_value(request)?;
        decode_data(self.transport.put(&format!("/assets/{code}"), &body).await?)
    }

    /// `DELETE /assets/{code}`
    pub async fn delete(&self, code: &str) -> Result<()> {
        self.transport.delete(&format!("/assets/{code}")).await?;
        Ok(())
    }
}
