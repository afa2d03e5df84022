use crate::core::{CatalogEntry, CatalogSource, ProductId};
use crate::utils::error::{Result, StoreError};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub enum LoadStatus {
    Pending,
    Loaded(Arc<Vec<CatalogEntry>>),
    Failed(Arc<StoreError>),
}

impl LoadStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadStatus::Pending)
    }

    pub fn entries(&self) -> Option<&[CatalogEntry]> {
        match self {
            LoadStatus::Loaded(entries) => Some(entries.as_slice()),
            _ => None,
        }
    }

    pub fn find(&self, id: ProductId) -> Option<&CatalogEntry> {
        self.entries()?.iter().find(|entry| entry.id == id)
    }
}

/// Reads the catalog once and returns the entries, rejecting duplicate ids.
pub async fn load<S>(source: &S) -> Result<Vec<CatalogEntry>>
where
    S: CatalogSource + ?Sized,
{
    let entries = source.fetch().await?;

    let mut seen = std::collections::HashSet::with_capacity(entries.len());
    if let Some(dup) = entries.iter().find(|entry| !seen.insert(entry.id)) {
        return Err(StoreError::MalformedCatalog {
            message: format!("duplicate product id {}", dup.id),
        });
    }

    Ok(entries)
}

/// Starts the single catalog read of a session and publishes its progress.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Spawns the fetch on the current tokio runtime. The status moves from `Pending`
    /// to `Loaded` or `Failed` exactly once; there is no retry.
    pub fn spawn<S>(source: S) -> CatalogHandle
    where
        S: CatalogSource + 'static,
    {
        let (tx, rx) = watch::channel(LoadStatus::Pending);

        let task = tokio::spawn(async move { load(&source).await });

        tokio::spawn(async move {
            let status = match task.await {
                Ok(Ok(entries)) => {
                    tracing::info!("Catalog loaded with {} entries", entries.len());
                    LoadStatus::Loaded(Arc::new(entries))
                }
                Ok(Err(e)) => {
                    tracing::warn!("Catalog load failed: {}", e);
                    LoadStatus::Failed(Arc::new(e))
                }
                Err(join_err) => {
                    tracing::warn!("Catalog load task failed: {}", join_err);
                    LoadStatus::Failed(Arc::new(StoreError::TaskFailed {
                        message: join_err.to_string(),
                    }))
                }
            };
            // Nobody listening any more is fine.
            let _ = tx.send(status);
        });

        CatalogHandle { status: rx }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogHandle {
    status: watch::Receiver<LoadStatus>,
}

impl CatalogHandle {
    /// Current status without waiting.
    pub fn status(&self) -> LoadStatus {
        self.status.borrow().clone()
    }

    /// Waits until the load has either succeeded or failed.
    pub async fn wait(&mut self) -> LoadStatus {
        if let Ok(status) = self.status.wait_for(|status| !status.is_pending()).await {
            return status.clone();
        }
        // Sender dropped without a final status; report whatever was last seen.
        self.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bigdecimal::BigDecimal;
    use tokio::sync::Notify;

    fn entry(id: u64) -> CatalogEntry {
        CatalogEntry {
            id: ProductId(id),
            title: format!("Product {}", id),
            price: BigDecimal::from(1),
            description: String::new(),
            category: "test".to_string(),
            image: String::new(),
        }
    }

    struct StaticSource(Vec<CatalogEntry>);

    #[async_trait]
    impl CatalogSource for StaticSource {
        async fn fetch(&self) -> Result<Vec<CatalogEntry>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CatalogSource for FailingSource {
        async fn fetch(&self) -> Result<Vec<CatalogEntry>> {
            Err(StoreError::UnexpectedStatus {
                status: 503,
                url: "http://catalog.test/products".to_string(),
            })
        }
    }

    struct GatedSource {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl CatalogSource for GatedSource {
        async fn fetch(&self) -> Result<Vec<CatalogEntry>> {
            self.gate.notified().await;
            Ok(vec![entry(1)])
        }
    }

    struct PanickingSource;

    #[async_trait]
    impl CatalogSource for PanickingSource {
        async fn fetch(&self) -> Result<Vec<CatalogEntry>> {
            panic!("source blew up")
        }
    }

    #[tokio::test]
    async fn test_load_returns_entries() {
        let entries = load(&StaticSource(vec![entry(1), entry(2)])).await.unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn test_load_rejects_duplicate_ids() {
        let err = load(&StaticSource(vec![entry(1), entry(1)])).await.unwrap_err();
        assert!(matches!(err, StoreError::MalformedCatalog { .. }));
    }

    #[tokio::test]
    async fn test_spawned_load_reports_success() {
        let mut handle = CatalogLoader::spawn(StaticSource(vec![entry(3)]));

        let status = handle.wait().await;

        assert_eq!(status.entries().unwrap().len(), 1);
        assert!(status.find(ProductId(3)).is_some());
        assert!(status.find(ProductId(4)).is_none());
    }

    #[tokio::test]
    async fn test_spawned_load_reports_failure() {
        let mut handle = CatalogLoader::spawn(FailingSource);

        match handle.wait().await {
            LoadStatus::Failed(err) => assert!(err.is_load_failure()),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_status_is_pending_until_fetch_resolves() {
        let gate = Arc::new(Notify::new());
        let mut handle = CatalogLoader::spawn(GatedSource {
            gate: Arc::clone(&gate),
        });

        assert!(handle.status().is_pending());

        gate.notify_one();
        let status = handle.wait().await;
        assert!(status.entries().is_some());
        assert!(!handle.status().is_pending());
    }

    #[tokio::test]
    async fn test_panicking_source_becomes_failure() {
        let mut handle = CatalogLoader::spawn(PanickingSource);

        match handle.wait().await {
            LoadStatus::Failed(err) => {
                assert!(matches!(err.as_ref(), StoreError::TaskFailed { .. }))
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
