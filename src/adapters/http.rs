use crate::core::{CatalogEntry, CatalogSource, ConfigProvider};
use crate::utils::error::{Result, StoreError};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_CATALOG_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// Plain `GET` against the catalog endpoint. No parameters, no auth, no pagination.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    endpoint: String,
}

impl HttpCatalogSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.catalog_endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<Vec<CatalogEntry>> {
        tracing::debug!("Making catalog request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("Catalog response status: {}", status);

        if !status.is_success() {
            return Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response.bytes().await?;
        let entries: Vec<CatalogEntry> = serde_json::from_slice(&body)?;

        tracing::debug!("Decoded {} catalog entries", entries.len());
        Ok(entries)
    }
}
