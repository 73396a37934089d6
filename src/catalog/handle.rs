//! Load-once async access to the component catalog.
//!
//! Every completion request awaits [`CatalogHandle::get`]. The first caller
//! triggers the load; concurrent callers wait on the same load. A failed load
//! leaves the handle empty, so the next request tries again.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::OnceCell;

use super::{ComponentCatalog, JsonCatalog};
use crate::error::{CatalogError, CatalogResult};

pub type SharedCatalog = Arc<dyn ComponentCatalog>;

type LoadFuture = Pin<Box<dyn Future<Output = CatalogResult<SharedCatalog>> + Send>>;
type Loader = dyn Fn() -> LoadFuture + Send + Sync;

/// Cheaply cloneable handle to a lazily loaded catalog.
#[derive(Clone)]
pub struct CatalogHandle {
    inner: Arc<Inner>,
}

struct Inner {
    cell: OnceCell<SharedCatalog>,
    loader: Box<Loader>,
}

impl std::fmt::Debug for CatalogHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogHandle")
            .field("loaded", &self.is_loaded())
            .finish_non_exhaustive()
    }
}

impl CatalogHandle {
    /// Handle around an already available catalog. `get` never suspends.
    pub fn ready(catalog: impl ComponentCatalog + 'static) -> Self {
        let catalog: SharedCatalog = Arc::new(catalog);
        Self {
            inner: Arc::new(Inner {
                cell: OnceCell::new_with(Some(catalog)),
                loader: Box::new(|| -> LoadFuture {
                    Box::pin(async { Err(CatalogError::unavailable("catalog already loaded")) })
                }),
            }),
        }
    }

    /// Handle that runs `loader` on first use (and again after a failure).
    pub fn with_loader<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CatalogResult<SharedCatalog>> + Send + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                cell: OnceCell::new(),
                loader: Box::new(move || -> LoadFuture { Box::pin(loader()) }),
            }),
        }
    }

    /// Handle that loads JSON schemas from `path` on a blocking thread.
    pub fn from_path(path: PathBuf) -> Self {
        Self::with_loader(move || {
            let path = path.clone();
            async move {
                let catalog = tokio::task::spawn_blocking(move || JsonCatalog::load(&path))
                    .await
                    .map_err(|err| {
                        CatalogError::unavailable(format!("catalog loader task failed: {err}"))
                    })??;
                Ok::<_, CatalogError>(Arc::new(catalog) as SharedCatalog)
            }
        })
    }

    /// Wait for the catalog, loading it if nobody has yet.
    pub async fn get(&self) -> CatalogResult<SharedCatalog> {
        let catalog = self
            .inner
            .cell
            .get_or_try_init(|| async {
                log::debug!(target: "camel_uri_ls::catalog", "Loading component catalog");
                (self.inner.loader)().await.inspect_err(|err| {
                    log::warn!(target: "camel_uri_ls::catalog", "Catalog load failed: {}", err);
                })
            })
            .await?;
        Ok(Arc::clone(catalog))
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.cell.initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ComponentModel, StaticCatalog};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn timer_catalog() -> StaticCatalog {
        StaticCatalog::new([ComponentModel::new("timer", "Generate messages.")])
    }

    #[tokio::test]
    async fn ready_handle_returns_catalog_without_loading() {
        let handle = CatalogHandle::ready(timer_catalog());

        assert!(handle.is_loaded());
        let catalog = handle.get().await.unwrap();
        assert_eq!(catalog.component_names(), vec!["timer"]);
    }

    #[tokio::test]
    async fn loader_runs_once_for_concurrent_callers() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let handle = CatalogHandle::with_loader(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, CatalogError>(Arc::new(timer_catalog()) as SharedCatalog) }
        });

        let (a, b) = tokio::join!(handle.get(), handle.get());

        assert!(a.is_ok() && b.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(handle.is_loaded());
    }

    #[tokio::test]
    async fn failed_load_is_reported_and_retried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let handle = CatalogHandle::with_loader(move || {
            let attempt = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt == 0 {
                    Err(CatalogError::unavailable("network down"))
                } else {
                    Ok(Arc::new(timer_catalog()) as SharedCatalog)
                }
            }
        });

        let first = handle.get().await;
        assert!(matches!(first, Err(CatalogError::Unavailable { .. })));
        assert!(!handle.is_loaded());

        let second = handle.get().await;
        assert!(second.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn from_path_reports_missing_files() {
        let handle = CatalogHandle::from_path(PathBuf::from("/nonexistent/catalog.json"));

        let result = handle.get().await;
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
