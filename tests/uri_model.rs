// Positional model of endpoint URIs, exercised through the public API

use camel_uri_ls::text::Span;
use camel_uri_ls::uri::{UriElement, UriRoot};
use rstest::rstest;

#[test]
fn scheme_path_and_query_are_separated() {
    let root = UriRoot::parse("timer:timerName?delay=10s");
    let node = root.component_and_path();

    assert_eq!(node.component().name(), "timer");
    assert_eq!(node.component().span(), Span::new(0, 5));

    let params: Vec<_> = node
        .path_params()
        .iter()
        .map(|param| (param.value(), param.span()))
        .collect();
    assert_eq!(params, vec![("timerName", Span::new(6, 15))]);

    let query: Vec<_> = root
        .query_params()
        .iter()
        .map(|param| (param.key(), param.value()))
        .collect();
    assert_eq!(query, vec![("delay", Some("10s"))]);
}

#[rstest]
#[case::bare_scheme("timer", 5)]
#[case::leading_colon(":foo", 4)]
#[case::empty("", 0)]
fn uri_without_usable_colon_is_all_component(#[case] text: &str, #[case] end: usize) {
    let root = UriRoot::parse(text);
    let node = root.component_and_path();

    assert_eq!(node.component().name(), text);
    assert_eq!(node.component().span(), Span::new(0, end));
    assert!(node.path_params().is_empty());
}

#[test]
fn empty_segments_keep_offsets_advancing() {
    let root = UriRoot::parse("a::b");

    let spans: Vec<_> = root
        .component_and_path()
        .path_params()
        .iter()
        .map(|param| param.span())
        .collect();
    assert_eq!(spans, vec![Span::new(2, 2), Span::new(3, 4)]);
}

#[test]
fn slash_separates_path_segments() {
    let root = UriRoot::parse("file:/data/inbox?noop=true");

    let values: Vec<_> = root
        .component_and_path()
        .path_params()
        .iter()
        .map(|param| param.value())
        .collect();
    assert_eq!(values, vec!["", "data", "inbox"]);
}

#[test]
fn node_spans_are_disjoint_and_increasing() {
    let root = UriRoot::parse("jms:queue:orders/eu:west?concurrentConsumers=2");
    let node = root.component_and_path();

    let mut previous_end = node.component().span().end;
    for param in node.path_params() {
        assert_eq!(param.span().start, previous_end + 1);
        assert!(param.span().end <= node.span().end);
        previous_end = param.span().end;
    }
}

#[rstest]
#[case::inside_scheme(2, "component")]
#[case::end_of_scheme(5, "component")]
#[case::inside_path_param(9, "path-param")]
#[case::question_mark(15, "path-param")]
#[case::inside_query(19, "query-param")]
fn element_at_finds_the_most_specific_node(#[case] position: usize, #[case] kind: &str) {
    let root = UriRoot::parse("timer:timerName?delay=10s");

    assert_eq!(root.element_at(position).kind(), kind);
}

#[test]
fn resolve_falls_back_to_the_path_node() {
    let root = UriRoot::parse("timer:timerName");
    let node = root.component_and_path();

    assert!(matches!(node.resolve(40), UriElement::ComponentAndPath(_)));
    assert!(matches!(
        node.resolve(7),
        UriElement::PathParam(param) if param.value() == "timerName"
    ));
}

#[test]
fn parsed_model_serializes_as_json() {
    let root = UriRoot::parse("timer:tick?period=1000");

    insta::assert_json_snapshot!(root, @r#"
    {
      "text": "timer:tick?period=1000",
      "componentAndPath": {
        "span": {
          "start": 0,
          "end": 10
        },
        "component": {
          "name": "timer",
          "span": {
            "start": 0,
            "end": 5
          }
        },
        "pathParams": [
          {
            "value": "tick",
            "span": {
              "start": 6,
              "end": 10
            },
            "index": 0
          }
        ]
      },
      "queryParams": [
        {
          "key": "period",
          "keySpan": {
            "start": 11,
            "end": 17
          },
          "value": "1000",
          "valueSpan": {
            "start": 18,
            "end": 22
          },
          "span": {
            "start": 11,
            "end": 22
          }
        }
      ]
    }
    "#);
}
