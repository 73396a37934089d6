use serde::Serialize;

use super::component_and_path::ComponentAndPath;
use super::query::{QueryParam, split_query_params};
use super::UriElement;
use crate::text::Span;

/// A whole endpoint URI: scheme and path, then query parameters.
///
/// Built once per document version and never mutated afterwards, so one
/// instance can serve concurrent completion requests by shared reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UriRoot {
    text: String,
    component_and_path: ComponentAndPath,
    query_params: Vec<QueryParam>,
}

impl UriRoot {
    pub fn parse(text: &str) -> Self {
        let component_and_path = ComponentAndPath::build(text);
        let path_end = component_and_path.span().end;
        // A path region that stops short of the end stopped at `?`
        let query_params = if path_end < text.len() {
            split_query_params(text, path_end + 1)
        } else {
            Vec::new()
        };

        log::trace!(
            target: "camel_uri_ls::uri",
            "parsed {:?}: {} path params, {} query params",
            text,
            component_and_path.path_params().len(),
            query_params.len()
        );

        Self {
            text: text.to_string(),
            component_and_path,
            query_params,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn span(&self) -> Span {
        Span::new(0, self.text.len())
    }

    pub fn component_and_path(&self) -> &ComponentAndPath {
        &self.component_and_path
    }

    pub fn query_params(&self) -> &[QueryParam] {
        &self.query_params
    }

    /// Most specific node at `position`, across path and query.
    pub fn element_at(&self, position: usize) -> UriElement<'_> {
        if self.component_and_path.span().touches(position) {
            return self.component_and_path.resolve(position);
        }
        self.query_params
            .iter()
            .find(|param| param.span().touches(position))
            .map_or(UriElement::Root(self), UriElement::QueryParam)
    }
}
