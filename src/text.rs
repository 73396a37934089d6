//! Text utilities shared by the URI model and the editor conversion.
//!
//! - `Span`: half-open byte ranges into a URI string
//! - `LineMap`: byte offsets to LSP (UTF-16) positions in a host document

pub mod position;
pub mod span;

pub use position::LineMap;
pub use span::{Span, clamp_to_char_boundary};
