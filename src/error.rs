//! Error handling types for camel-uri-ls
//!
//! Parsing never fails: malformed URIs degrade to a fallback structure.
//! Only the catalog and configuration layers produce errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or querying the component catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog could not be loaded or is otherwise not usable
    #[error("Catalog unavailable: {message}")]
    Unavailable { message: String },

    /// The catalog lists a name but has no model for it
    #[error("Component not found in catalog: {name}")]
    ComponentNotFound { name: String },

    /// A component schema could not be decoded
    #[error("Invalid component schema {origin}: {message}")]
    Schema { origin: String, message: String },

    /// IO error while reading schema files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    /// Create an unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        CatalogError::Unavailable {
            message: message.into(),
        }
    }

    /// Create a component not found error
    pub fn component_not_found(name: impl Into<String>) -> Self {
        CatalogError::ComponentNotFound { name: name.into() }
    }

    /// Create a schema error, `origin` names the file or index entry
    pub fn schema(origin: impl Into<String>, message: impl Into<String>) -> Self {
        CatalogError::Schema {
            origin: origin.into(),
            message: message.into(),
        }
    }
}

/// Errors raised while reading a settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
