//! Scheme completion for endpoint URIs.
//!
//! A request runs in stages: range check, catalog wait, candidate
//! generation, then prefix filtering. Generation and filtering are separate so
//! the catalog round-trip never depends on what the user typed.

pub mod filter;
pub mod generator;
pub mod request;

pub use filter::{apply_filter, filter_for, matches};
pub use generator::generate;
pub use request::{CompletionRequest, RequestState, complete};

use serde::Serialize;

use crate::catalog::CatalogHandle;
use crate::error::CatalogResult;
use crate::text::Span;
use crate::uri::UriRoot;

/// A suggested replacement for the partially typed scheme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionCandidate {
    pub label: String,
    pub documentation: Option<String>,
    pub deprecated: bool,
    /// Span of the URI text that accepting this candidate replaces.
    pub replace_range: Span,
}

impl CompletionCandidate {
    /// `uri` with `replace_range` replaced by `label`.
    pub fn apply(&self, uri: &str) -> String {
        let start = self.replace_range.start.min(uri.len());
        let end = self.replace_range.end.clamp(start, uri.len());
        let mut edited = String::with_capacity(uri.len() + self.label.len());
        edited.push_str(&uri[..start]);
        edited.push_str(&self.label);
        edited.push_str(&uri[end..]);
        edited
    }
}

/// Scheme completions for a cursor anywhere in `root`.
///
/// Only the scheme and path portion offers completions; a cursor in the
/// query region yields an empty list.
pub async fn complete_at(
    root: &UriRoot,
    catalog: &CatalogHandle,
    position: usize,
) -> CatalogResult<Vec<CompletionCandidate>> {
    complete(catalog, root.component_and_path(), position).await
}
