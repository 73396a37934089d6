//! Completion entry point for a language server handler.
//!
//! This is the boundary where catalog failures turn into an empty list plus
//! a logged warning, and where superseded requests are discarded.

use tower_lsp_server::ls_types::CompletionItem;
use url::Url;

use super::{RequestTracker, to_completion_items};
use crate::catalog::{CatalogHandle, SharedCatalog};
use crate::completion::complete_at;
use crate::config::CompletionSettings;
use crate::error::CatalogError;
use crate::uri::UriRoot;

/// An endpoint URI found inside a host document (route XML, Java DSL, ...).
#[derive(Clone, Copy, Debug)]
pub struct UriOccurrence<'a> {
    pub document_uri: &'a Url,
    pub document_text: &'a str,
    /// Byte offset of the URI's first character in `document_text`.
    pub uri_offset: usize,
    pub uri_text: &'a str,
}

#[derive(Debug, Clone)]
pub struct CompletionService {
    catalog: CatalogHandle,
    settings: CompletionSettings,
    tracker: RequestTracker,
}

impl CompletionService {
    pub fn new(catalog: CatalogHandle, settings: CompletionSettings) -> Self {
        Self {
            catalog,
            settings,
            tracker: RequestTracker::new(),
        }
    }

    /// Build the catalog handle from `settings.catalog_path`. Without a path
    /// every request reports the catalog as unavailable.
    pub fn from_settings(settings: CompletionSettings) -> Self {
        let catalog = match &settings.catalog_path {
            Some(path) => CatalogHandle::from_path(path.clone()),
            None => CatalogHandle::with_loader(|| async {
                Err::<SharedCatalog, _>(CatalogError::unavailable("no catalogPath configured"))
            }),
        };
        Self::new(catalog, settings)
    }

    pub fn catalog(&self) -> &CatalogHandle {
        &self.catalog
    }

    pub fn tracker(&self) -> &RequestTracker {
        &self.tracker
    }

    /// Completion items for a cursor at byte offset `cursor` of the host
    /// document.
    ///
    /// Returns `None` when a newer request for the same document started
    /// while this one was waiting; the caller should drop it.
    pub async fn completion(
        &self,
        occurrence: UriOccurrence<'_>,
        cursor: usize,
    ) -> Option<Vec<CompletionItem>> {
        let document_uri = occurrence.document_uri;
        let request_id = self.tracker.start_request(document_uri);
        let root = UriRoot::parse(occurrence.uri_text);
        // A cursor before the URI is out of range for every node
        let position = cursor
            .checked_sub(occurrence.uri_offset)
            .unwrap_or(usize::MAX);

        let result = complete_at(&root, &self.catalog, position).await;

        if !self.tracker.is_active(document_uri, request_id) {
            log::debug!(
                target: "camel_uri_ls::completion",
                "Dropping superseded completion request {} for {}",
                request_id,
                document_uri
            );
            return None;
        }
        self.tracker.finish_request(document_uri, request_id);

        let candidates = result.unwrap_or_else(|err| {
            log::warn!(
                target: "camel_uri_ls::completion",
                "Completion for {} failed: {}",
                document_uri,
                err
            );
            Vec::new()
        });
        Some(to_completion_items(
            &candidates,
            occurrence.document_text,
            occurrence.uri_offset,
            self.settings.include_deprecated,
        ))
    }
}
