use super::CompletionCandidate;
use crate::text::clamp_to_char_boundary;
use crate::uri::Component;

/// Prefix typed so far for the scheme at `position`.
///
/// `None` means "match everything": nothing typed yet, or the cursor sits at
/// the very start. Once the cursor is past the name (on the separator or in
/// the path) the filter becomes `<name>:`, so that `ahc` no longer matches
/// `ahc-ws`.
pub fn filter_for(component: &Component, position: usize) -> Option<String> {
    let name = component.name();
    let start = component.span().start;
    if name.trim().is_empty() || position == start {
        return None;
    }

    let relative = position.saturating_sub(start);
    let typed_end = clamp_to_char_boundary(name, relative);
    let mut filter = name[..typed_end].to_string();
    if relative > name.len() {
        filter.push(':');
    }
    Some(filter)
}

/// Case-sensitive prefix match on the label. No filter matches everything.
pub fn matches(candidate: &CompletionCandidate, filter: Option<&str>) -> bool {
    match filter {
        None | Some("") => true,
        Some(prefix) => candidate.label.starts_with(prefix),
    }
}

/// Keep the candidates that match `filter`, preserving their order.
pub fn apply_filter(
    candidates: Vec<CompletionCandidate>,
    filter: Option<&str>,
) -> Vec<CompletionCandidate> {
    candidates
        .into_iter()
        .filter(|candidate| matches(candidate, filter))
        .collect()
}
