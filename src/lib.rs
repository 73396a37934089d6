pub mod catalog;
pub mod completion;
pub mod config;
pub mod error;
pub mod lsp;
pub mod text;
pub mod uri;

pub use catalog::{CatalogHandle, ComponentCatalog, ComponentModel, JsonCatalog, StaticCatalog};
pub use completion::{CompletionCandidate, complete_at};
pub use config::{CompletionSettings, load_settings};
pub use error::{CatalogError, ConfigError};
pub use lsp::{CompletionService, UriOccurrence};
pub use uri::{UriElement, UriRoot};
