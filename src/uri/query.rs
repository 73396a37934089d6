use serde::Serialize;

use crate::text::Span;

/// XML attribute values carry `&` escaped; both forms separate parameters.
const SEPARATORS: [&str; 2] = ["&amp;", "&"];
const KEY_VALUE_SEPARATOR: char = '=';

/// One `key=value` entry of the query string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParam {
    key: String,
    key_span: Span,
    value: Option<String>,
    value_span: Option<Span>,
    span: Span,
}

impl QueryParam {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn key_span(&self) -> Span {
        self.key_span
    }

    /// `None` when the entry has no `=`.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn value_span(&self) -> Option<Span> {
        self.value_span
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

/// Split the query region `text[start..]` into parameters. Empty entries
/// (`a=1&&b=2`) are kept so that offsets of later entries stay exact.
pub(crate) fn split_query_params(text: &str, start: usize) -> Vec<QueryParam> {
    let mut params = Vec::new();
    let mut entry_start = start;
    let mut cursor = start;

    while cursor < text.len() {
        match separator_at(text, cursor) {
            Some(len) => {
                params.push(query_param(text, entry_start, cursor));
                cursor += len;
                entry_start = cursor;
            }
            None => cursor += text[cursor..].chars().next().map_or(1, char::len_utf8),
        }
    }
    params.push(query_param(text, entry_start, text.len()));
    params
}

fn separator_at(text: &str, offset: usize) -> Option<usize> {
    SEPARATORS
        .iter()
        .find(|sep| text[offset..].starts_with(**sep))
        .map(|sep| sep.len())
}

fn query_param(text: &str, start: usize, end: usize) -> QueryParam {
    let entry = &text[start..end];
    let span = Span::new(start, end);
    match entry.find(KEY_VALUE_SEPARATOR) {
        Some(eq) => QueryParam {
            key: entry[..eq].to_string(),
            key_span: Span::new(start, start + eq),
            value: Some(entry[eq + 1..].to_string()),
            value_span: Some(Span::new(start + eq + 1, end)),
            span,
        },
        None => QueryParam {
            key: entry.to_string(),
            key_span: span,
            value: None,
            value_span: None,
            span,
        },
    }
}
