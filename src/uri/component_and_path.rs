use serde::Serialize;

use super::UriElement;
use crate::text::Span;

const SCHEME_SEPARATOR: char = ':';
const QUERY_START: char = '?';
/// Path segments are split on either character. There is no escaping: a
/// literal `:` or `/` inside a value is read as a separator.
const PATH_SEPARATORS: [char; 2] = [':', '/'];

/// The scheme token of an endpoint URI, e.g. `timer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Component {
    name: String,
    span: Span,
}

impl Component {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

/// One path segment between separators. May be zero-length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PathParam {
    value: String,
    span: Span,
    /// Position among the path parameters of its URI, starting at 0.
    index: usize,
}

impl PathParam {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Scheme plus path portion of a URI: `timer:timerName` in
/// `timer:timerName?delay=10s`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentAndPath {
    span: Span,
    component: Component,
    /// Ordered by start offset.
    path_params: Vec<PathParam>,
}

impl ComponentAndPath {
    /// Segment `local_text` into component and path parameters.
    ///
    /// Never fails. Without a scheme separator (or with one at offset 0) the
    /// whole text is the component name and there are no path parameters.
    pub fn build(local_text: &str) -> Self {
        let pos_colon = match local_text.find(SCHEME_SEPARATOR) {
            Some(pos) if pos > 0 => pos,
            _ => return Self::bare(local_text),
        };

        let component = Component {
            name: local_text[..pos_colon].to_string(),
            span: Span::new(0, pos_colon),
        };
        let path_end = local_text[pos_colon..]
            .find(QUERY_START)
            .map_or(local_text.len(), |pos| pos_colon + pos);
        let path_params = split_path_params(local_text, pos_colon + 1, path_end);

        Self {
            span: Span::new(0, path_end),
            component,
            path_params,
        }
    }

    fn bare(local_text: &str) -> Self {
        let span = Span::new(0, local_text.len());
        Self {
            span,
            component: Component {
                name: local_text.to_string(),
                span,
            },
            path_params: Vec::new(),
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn component(&self) -> &Component {
        &self.component
    }

    pub fn path_params(&self) -> &[PathParam] {
        &self.path_params
    }

    /// True when a scheme separator was found, i.e. a path region exists.
    pub fn has_path(&self) -> bool {
        !self.path_params.is_empty()
    }

    /// Most specific node at `position`: the component, else the path
    /// parameter under the cursor, else this node itself.
    ///
    /// The component is checked first so that a cursor sitting on the scheme
    /// separator still resolves to the scheme it just finished.
    pub fn resolve(&self, position: usize) -> UriElement<'_> {
        if self.component.span.touches(position) {
            return UriElement::Component(&self.component);
        }
        self.path_params
            .iter()
            .find(|param| param.span.touches(position))
            .map_or(UriElement::ComponentAndPath(self), UriElement::PathParam)
    }
}

/// Split `text[start..end)` on the path separators. Every token, empty ones
/// included, advances the cursor by its length plus one separator.
fn split_path_params(text: &str, start: usize, end: usize) -> Vec<PathParam> {
    let mut cursor = start;
    text[start..end]
        .split(PATH_SEPARATORS)
        .enumerate()
        .map(|(index, token)| {
            let param = PathParam {
                value: token.to_string(),
                span: Span::new(cursor, cursor + token.len()),
                index,
            };
            cursor += token.len() + 1;
            param
        })
        .collect()
}
