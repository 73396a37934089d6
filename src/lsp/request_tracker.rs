//! Supersession tracking for completion requests.
//!
//! Each keystroke may trigger a new completion request for the same document
//! while an earlier one is still waiting on the catalog. The newest request
//! wins: older ones keep running against their own URI snapshot, and their
//! results are dropped once `is_active` reports them superseded.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use url::Url;

/// Tracks the most recent completion request per document.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    next_id: Arc<AtomicU64>,
    active_requests: Arc<DashMap<Url, u64>>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `uri`, superseding any earlier one.
    pub fn start_request(&self, uri: &Url) -> u64 {
        let request_id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.active_requests.insert(uri.clone(), request_id);
        request_id
    }

    /// True while no newer request for `uri` has started.
    pub fn is_active(&self, uri: &Url, request_id: u64) -> bool {
        self.active_requests
            .get(uri)
            .is_some_and(|entry| *entry == request_id)
    }

    /// Stop tracking `request_id` if it is still the active one.
    pub fn finish_request(&self, uri: &Url, request_id: u64) {
        self.active_requests
            .remove_if(uri, |_, id| *id == request_id);
    }

    /// Forget every request for `uri`, e.g. when the document closes.
    pub fn cancel_all_for_uri(&self, uri: &Url) {
        self.active_requests.remove(uri);
    }
}
