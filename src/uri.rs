//! Positional model of a Camel endpoint URI.
//!
//! `timer:timerName?delay=10s` is split, without a grammar, into:
//! - the component scheme `timer`
//! - path parameters separated by `:` or `/` (`timerName`)
//! - query parameters separated by `&` (`delay=10s`)
//!
//! Every node carries a byte `Span` into the URI text. Nodes are immutable
//! once built; a text change rebuilds the whole model.

pub mod component_and_path;
pub mod query;
pub mod root;

pub use component_and_path::{Component, ComponentAndPath, PathParam};
pub use query::QueryParam;
pub use root::UriRoot;

use crate::text::Span;

/// The most specific node found at a cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UriElement<'a> {
    Root(&'a UriRoot),
    ComponentAndPath(&'a ComponentAndPath),
    Component(&'a Component),
    PathParam(&'a PathParam),
    QueryParam(&'a QueryParam),
}

impl UriElement<'_> {
    pub fn span(&self) -> Span {
        match self {
            UriElement::Root(root) => root.span(),
            UriElement::ComponentAndPath(node) => node.span(),
            UriElement::Component(component) => component.span(),
            UriElement::PathParam(param) => param.span(),
            UriElement::QueryParam(param) => param.span(),
        }
    }

    /// Short name used in log lines and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            UriElement::Root(_) => "root",
            UriElement::ComponentAndPath(_) => "component-and-path",
            UriElement::Component(_) => "component",
            UriElement::PathParam(_) => "path-param",
            UriElement::QueryParam(_) => "query-param",
        }
    }
}
