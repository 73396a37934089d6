use tower_lsp_server::ls_types::{
    CompletionItem, CompletionItemKind, CompletionItemTag, CompletionTextEdit, Documentation,
    TextEdit,
};

use crate::completion::CompletionCandidate;
use crate::text::LineMap;

/// Convert a candidate into an LSP item whose text edit replaces the scheme
/// inside the host document. `uri_offset` is the byte offset of the URI's
/// first character in that document.
pub fn to_completion_item(
    candidate: &CompletionCandidate,
    document: &LineMap<'_>,
    uri_offset: usize,
) -> CompletionItem {
    let range = document.range(candidate.replace_range.shift(uri_offset));
    CompletionItem {
        label: candidate.label.clone(),
        kind: Some(CompletionItemKind::MODULE),
        documentation: candidate.documentation.clone().map(Documentation::String),
        deprecated: Some(candidate.deprecated),
        tags: candidate
            .deprecated
            .then(|| vec![CompletionItemTag::DEPRECATED]),
        text_edit: Some(CompletionTextEdit::Edit(TextEdit::new(
            range,
            candidate.label.clone(),
        ))),
        ..Default::default()
    }
}

/// Convert a batch, dropping deprecated candidates unless `include_deprecated`.
pub fn to_completion_items(
    candidates: &[CompletionCandidate],
    document_text: &str,
    uri_offset: usize,
    include_deprecated: bool,
) -> Vec<CompletionItem> {
    let document = LineMap::new(document_text);
    candidates
        .iter()
        .filter(|candidate| include_deprecated || !candidate.deprecated)
        .map(|candidate| to_completion_item(candidate, &document, uri_offset))
        .collect()
}
