use line_index::{LineCol, LineIndex, TextSize, WideEncoding};
use tower_lsp_server::ls_types::{Position, Range};

use super::span::{Span, clamp_to_char_boundary};

/// Maps byte offsets of a host document to LSP positions.
///
/// LSP positions count UTF-16 code units within a line, so offsets are first
/// resolved to a UTF-8 line/column and then widened.
pub struct LineMap<'a> {
    text: &'a str,
    index: LineIndex,
}

impl<'a> LineMap<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            index: LineIndex::new(text),
        }
    }

    /// Convert a byte offset into an LSP position. Offsets past the end of
    /// the document clamp to the end.
    pub fn position(&self, offset: usize) -> Position {
        let offset = clamp_to_char_boundary(self.text, offset);
        let size = TextSize::from(u32::try_from(offset).unwrap_or(u32::MAX));
        let line_col = self.index.line_col(size);
        let character = self.widen(line_col);
        Position::new(line_col.line, character)
    }

    pub fn range(&self, span: Span) -> Range {
        Range::new(self.position(span.start), self.position(span.end))
    }

    fn widen(&self, line_col: LineCol) -> u32 {
        match self.index.to_wide(WideEncoding::Utf16, line_col) {
            Some(wide) => wide.col,
            None => line_col.col,
        }
    }
}
