//! Catalog backed by Camel component JSON schemas.
//!
//! A schema looks like:
//!
//! ```json
//! { "component": { "scheme": "timer", "description": "...", "deprecated": false } }
//! ```
//!
//! Older schemas carry `deprecated` as a string, newer ones as a boolean.
//! Both are kept as the raw string so that interpretation happens in one place
//! ([`DeprecationFlag`](super::DeprecationFlag)).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{ComponentCatalog, ComponentModel};
use crate::error::{CatalogError, CatalogResult};

#[derive(Deserialize)]
struct ComponentSchema {
    component: SchemaComponent,
}

#[derive(Deserialize)]
struct SchemaComponent {
    scheme: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, deserialize_with = "raw_flag")]
    deprecated: Option<String>,
}

fn raw_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        Value::String(raw) => raw,
        other => other.to_string(),
    }))
}

impl From<SchemaComponent> for ComponentModel {
    fn from(component: SchemaComponent) -> Self {
        Self {
            scheme: component.scheme,
            description: component.description,
            deprecated: component.deprecated,
        }
    }
}

/// Component catalog loaded from JSON schema files.
#[derive(Clone, Debug, Default)]
pub struct JsonCatalog {
    models: Vec<ComponentModel>,
    by_scheme: HashMap<String, usize>,
}

impl JsonCatalog {
    /// Load from a directory of `*.json` schemas or from a single file.
    ///
    /// Directory entries are read in file name order so enumeration is stable
    /// across loads.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let mut catalog = Self::default();
        if path.is_dir() {
            let mut files: Vec<_> = fs::read_dir(path)?
                .filter_map(|entry| entry.ok().map(|entry| entry.path()))
                .filter(|file| file.extension().is_some_and(|ext| ext == "json"))
                .collect();
            files.sort();
            for file in files {
                let contents = fs::read_to_string(&file)?;
                catalog.add_document(&file.display().to_string(), &contents)?;
            }
        } else {
            let contents = fs::read_to_string(path)?;
            catalog.add_document(&path.display().to_string(), &contents)?;
        }

        log::info!(
            target: "camel_uri_ls::catalog",
            "Loaded {} components from {}",
            catalog.models.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse one JSON document holding a schema or an array of schemas.
    pub fn from_json(origin: &str, json: &str) -> CatalogResult<Self> {
        let mut catalog = Self::default();
        catalog.add_document(origin, json)?;
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    fn add_document(&mut self, origin: &str, json: &str) -> CatalogResult<()> {
        let value: Value = serde_json::from_str(json)
            .map_err(|err| CatalogError::schema(origin, err.to_string()))?;
        let schemas = match value {
            Value::Array(items) => items,
            single => vec![single],
        };
        for schema in schemas {
            let schema: ComponentSchema = serde_json::from_value(schema)
                .map_err(|err| CatalogError::schema(origin, err.to_string()))?;
            self.insert(origin, schema.component.into());
        }
        Ok(())
    }

    fn insert(&mut self, origin: &str, model: ComponentModel) {
        if self.by_scheme.contains_key(&model.scheme) {
            log::warn!(
                target: "camel_uri_ls::catalog",
                "Ignoring duplicate component '{}' from {}",
                model.scheme,
                origin
            );
            return;
        }
        self.by_scheme.insert(model.scheme.clone(), self.models.len());
        self.models.push(model);
    }
}

impl ComponentCatalog for JsonCatalog {
    fn component_names(&self) -> Vec<String> {
        self.models.iter().map(|model| model.scheme.clone()).collect()
    }

    fn component_model(&self, name: &str) -> CatalogResult<ComponentModel> {
        self.by_scheme
            .get(name)
            .map(|&index| self.models[index].clone())
            .ok_or_else(|| CatalogError::component_not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DeprecationFlag;
    use tempfile::TempDir;

    const TIMER: &str = r#"{
        "component": {
            "kind": "component",
            "scheme": "timer",
            "description": "Generate messages in specified intervals using java.util.Timer.",
            "deprecated": false
        },
        "properties": {}
    }"#;

    #[test]
    fn boolean_and_string_flags_are_kept_raw() {
        let json = r#"[
            {"component": {"scheme": "ahc", "deprecated": "true"}},
            {"component": {"scheme": "timer", "deprecated": false}},
            {"component": {"scheme": "jms"}}
        ]"#;
        let catalog = JsonCatalog::from_json("inline", json).unwrap();

        let ahc = catalog.component_model("ahc").unwrap();
        assert_eq!(ahc.deprecated.as_deref(), Some("true"));
        assert_eq!(ahc.deprecation(), DeprecationFlag::True);
        assert_eq!(ahc.description, None);

        let timer = catalog.component_model("timer").unwrap();
        assert_eq!(timer.deprecated.as_deref(), Some("false"));

        let jms = catalog.component_model("jms").unwrap();
        assert_eq!(jms.deprecated, None);
    }

    #[test]
    fn missing_scheme_is_a_schema_error() {
        let err = JsonCatalog::from_json("broken.json", r#"{"component": {}}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Schema { origin, .. } if origin == "broken.json"));
    }

    #[test]
    fn duplicate_schemes_keep_the_first_entry() {
        let json = r#"[
            {"component": {"scheme": "timer", "description": "first"}},
            {"component": {"scheme": "timer", "description": "second"}}
        ]"#;
        let catalog = JsonCatalog::from_json("inline", json).unwrap();

        assert_eq!(catalog.len(), 1);
        let timer = catalog.component_model("timer").unwrap();
        assert_eq!(timer.description.as_deref(), Some("first"));
    }

    #[test]
    fn load_reads_directory_in_file_name_order() {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::write(dir.path().join("timer.json"), TIMER).unwrap();
        fs::write(
            dir.path().join("ahc.json"),
            r#"{"component": {"scheme": "ahc", "description": "Call external HTTP services."}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("README.txt"), "not a schema").unwrap();

        let catalog = JsonCatalog::load(dir.path()).unwrap();

        assert_eq!(catalog.component_names(), vec!["ahc", "timer"]);
    }

    #[test]
    fn load_missing_path_is_an_io_error() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let err = JsonCatalog::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
