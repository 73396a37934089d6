//! Component catalog: the registry of schemes and their metadata.
//!
//! The catalog is read-only and shared by every completion request. Loading
//! may be slow, so it sits behind an async [`CatalogHandle`]; queries against
//! a loaded catalog are synchronous and side-effect free.

pub mod handle;
pub mod json;
pub mod model;

pub use handle::{CatalogHandle, SharedCatalog};
pub use json::JsonCatalog;
pub use model::{ComponentModel, DeprecationFlag};

use crate::error::{CatalogError, CatalogResult};

/// Read access to component metadata.
pub trait ComponentCatalog: Send + Sync {
    /// All known scheme names. Order is stable within one call only.
    fn component_names(&self) -> Vec<String>;

    /// Raw metadata for one component.
    fn component_model(&self, name: &str) -> CatalogResult<ComponentModel>;
}

/// In-memory catalog that enumerates components in insertion order.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    models: Vec<ComponentModel>,
}

impl StaticCatalog {
    pub fn new(models: impl IntoIterator<Item = ComponentModel>) -> Self {
        Self {
            models: models.into_iter().collect(),
        }
    }
}

impl ComponentCatalog for StaticCatalog {
    fn component_names(&self) -> Vec<String> {
        self.models.iter().map(|model| model.scheme.clone()).collect()
    }

    fn component_model(&self, name: &str) -> CatalogResult<ComponentModel> {
        self.models
            .iter()
            .find(|model| model.scheme == name)
            .cloned()
            .ok_or_else(|| CatalogError::component_not_found(name))
    }
}
