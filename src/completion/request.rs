//! Completion request state machine.
//!
//! ```text
//! Start --out of range--> OutOfRange --> Done([])
//!   |
//!   +--in range--> AwaitingCatalog --catalog--> Filtering --> Done(items)
//! ```
//!
//! Transitions are synchronous. The only suspension point lives in
//! [`complete`], which awaits the catalog while the request sits in
//! `AwaitingCatalog`. An out-of-range request reaches `Done` without ever
//! touching the catalog.

use super::{CompletionCandidate, apply_filter, filter_for, generate};
use crate::catalog::{CatalogHandle, ComponentCatalog};
use crate::error::CatalogResult;
use crate::uri::ComponentAndPath;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestState {
    Start,
    OutOfRange,
    AwaitingCatalog,
    Filtering(Vec<CompletionCandidate>),
    Done(Vec<CompletionCandidate>),
}

/// One completion request against an immutable URI snapshot.
#[derive(Debug)]
pub struct CompletionRequest<'a> {
    node: &'a ComponentAndPath,
    offset: usize,
    state: RequestState,
}

impl<'a> CompletionRequest<'a> {
    pub fn new(node: &'a ComponentAndPath, offset: usize) -> Self {
        Self {
            node,
            offset,
            state: RequestState::Start,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, RequestState::Done(_))
    }

    /// Advance one transition.
    ///
    /// `catalog` is only consulted in `AwaitingCatalog`; without it the
    /// request stays there. On a catalog error the state is left unchanged.
    pub fn step(&mut self, catalog: Option<&dyn ComponentCatalog>) -> CatalogResult<()> {
        let state = std::mem::replace(&mut self.state, RequestState::Start);
        self.state = match state {
            RequestState::Start if self.node.span().touches(self.offset) => {
                RequestState::AwaitingCatalog
            }
            RequestState::Start => RequestState::OutOfRange,
            RequestState::OutOfRange => RequestState::Done(Vec::new()),
            RequestState::AwaitingCatalog => match catalog {
                Some(catalog) => match generate(catalog, self.node.component()) {
                    Ok(candidates) => RequestState::Filtering(candidates),
                    Err(err) => {
                        self.state = RequestState::AwaitingCatalog;
                        return Err(err);
                    }
                },
                None => RequestState::AwaitingCatalog,
            },
            RequestState::Filtering(candidates) => {
                let element = self.node.resolve(self.offset);
                let filter = filter_for(self.node.component(), self.offset);
                log::debug!(
                    target: "camel_uri_ls::completion",
                    "filtering {} candidates at {} ({}) with {:?}",
                    candidates.len(),
                    self.offset,
                    element.kind(),
                    filter
                );
                RequestState::Done(apply_filter(candidates, filter.as_deref()))
            }
            done @ RequestState::Done(_) => done,
        };
        Ok(())
    }

    /// Run every transition that needs no catalog. Stops in
    /// `AwaitingCatalog` or `Done`.
    pub fn run_until_catalog(&mut self) {
        while !self.is_done() && self.state != RequestState::AwaitingCatalog {
            // Without a catalog no transition can fail
            let _ = self.step(None);
        }
    }

    /// Items of a finished request, `None` while still running.
    pub fn into_items(self) -> Option<Vec<CompletionCandidate>> {
        match self.state {
            RequestState::Done(items) => Some(items),
            _ => None,
        }
    }
}

/// Completions for `offset` within `node`.
///
/// Result order is catalog enumeration order. Catalog failures propagate
/// unchanged; turning them into an empty list is up to the caller.
pub async fn complete(
    catalog: &CatalogHandle,
    node: &ComponentAndPath,
    offset: usize,
) -> CatalogResult<Vec<CompletionCandidate>> {
    let mut request = CompletionRequest::new(node, offset);
    loop {
        request.run_until_catalog();
        if request.is_done() {
            break;
        }
        let loaded = catalog.get().await?;
        request.step(Some(loaded.as_ref()))?;
    }
    Ok(request.into_items().unwrap_or_default())
}
