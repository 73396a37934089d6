use super::CompletionCandidate;
use crate::catalog::{ComponentCatalog, ComponentModel};
use crate::error::CatalogResult;
use crate::text::Span;
use crate::uri::Component;

/// One candidate per catalog component, in catalog order, each replacing the
/// whole scheme span of `component`. No filtering happens here.
pub fn generate(
    catalog: &dyn ComponentCatalog,
    component: &Component,
) -> CatalogResult<Vec<CompletionCandidate>> {
    let replace_range = component.span();
    catalog
        .component_names()
        .iter()
        .map(|name| {
            let model = catalog.component_model(name)?;
            Ok(candidate(model, replace_range))
        })
        .collect()
}

fn candidate(model: ComponentModel, replace_range: Span) -> CompletionCandidate {
    let deprecated = model.deprecation().is_deprecated();
    CompletionCandidate {
        label: model.scheme,
        documentation: model.description,
        deprecated,
        replace_range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::error::CatalogError;
    use crate::uri::ComponentAndPath;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new([
            ComponentModel::new("timer", "Generate messages in specified intervals."),
            ComponentModel::new("ahc", "Call external HTTP services.").with_deprecated("TRUE"),
            ComponentModel::new("jms", "Send and receive messages to/from JMS.")
                .with_deprecated("maybe"),
        ])
    }

    #[test]
    fn candidates_follow_catalog_order_and_flags() {
        let node = ComponentAndPath::build("ti:foo");

        let candidates = generate(&catalog(), node.component()).unwrap();

        let summary: Vec<(&str, bool)> = candidates
            .iter()
            .map(|c| (c.label.as_str(), c.deprecated))
            .collect();
        assert_eq!(
            summary,
            vec![("timer", false), ("ahc", true), ("jms", false)]
        );
        assert_eq!(
            candidates[0].documentation.as_deref(),
            Some("Generate messages in specified intervals.")
        );
    }

    #[test]
    fn every_candidate_replaces_the_component_span() {
        let node = ComponentAndPath::build("ti:foo");

        for candidate in generate(&catalog(), node.component()).unwrap() {
            assert_eq!(candidate.replace_range, Span::new(0, 2));
        }
    }

    #[test]
    fn empty_component_still_gets_an_empty_replace_range() {
        let node = ComponentAndPath::build("");

        let candidates = generate(&catalog(), node.component()).unwrap();

        assert_eq!(candidates.len(), 3);
        assert!(candidates.iter().all(|c| c.replace_range == Span::empty(0)));
    }

    struct BrokenCatalog;

    impl ComponentCatalog for BrokenCatalog {
        fn component_names(&self) -> Vec<String> {
            vec!["timer".to_string()]
        }

        fn component_model(&self, name: &str) -> CatalogResult<ComponentModel> {
            Err(CatalogError::schema(name, "truncated"))
        }
    }

    #[test]
    fn model_errors_propagate() {
        let node = ComponentAndPath::build("timer");

        let err = generate(&BrokenCatalog, node.component()).unwrap_err();

        assert!(matches!(err, CatalogError::Schema { .. }));
    }
}
