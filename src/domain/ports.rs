use crate::domain::model::CatalogEntry;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the catalog comes from. Read exactly once per session.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<CatalogEntry>>;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_endpoint(&self) -> &str;
    fn currency_symbol(&self) -> &str;
    fn show_descriptions(&self) -> bool;
}
