//! Editor-facing boundary: LSP completion items and stale-request tracking.
//!
//! The transport itself is not part of this crate; these pieces are what a
//! language server handler calls into.

pub mod completion_item;
pub mod request_tracker;
pub mod service;

pub use completion_item::{to_completion_item, to_completion_items};
pub use request_tracker::RequestTracker;
pub use service::{CompletionService, UriOccurrence};
