use serde::{Deserialize, Serialize};

/// Raw component metadata as the catalog reports it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentModel {
    pub scheme: String,
    pub description: Option<String>,
    /// Loosely typed flag string from the schema, e.g. `"true"`, `"false"`.
    pub deprecated: Option<String>,
}

impl ComponentModel {
    pub fn new(scheme: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            description: Some(description.into()),
            deprecated: None,
        }
    }

    pub fn with_deprecated(mut self, raw: impl Into<String>) -> Self {
        self.deprecated = Some(raw.into());
        self
    }

    pub fn deprecation(&self) -> DeprecationFlag {
        DeprecationFlag::parse(self.deprecated.as_deref())
    }
}

/// Interpretation of the raw `deprecated` attribute.
///
/// Only a case-insensitive `"true"` marks a component deprecated. Anything
/// else that is not `"false"` is `Unrecognized` and counts as not deprecated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeprecationFlag {
    True,
    False,
    Unrecognized,
}

impl DeprecationFlag {
    /// An absent flag reads as `False`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => DeprecationFlag::False,
            Some(value) if value.eq_ignore_ascii_case("true") => DeprecationFlag::True,
            Some(value) if value.eq_ignore_ascii_case("false") => DeprecationFlag::False,
            Some(_) => DeprecationFlag::Unrecognized,
        }
    }

    pub fn is_deprecated(self) -> bool {
        matches!(self, DeprecationFlag::True)
    }
}
