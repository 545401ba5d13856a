//! In-page anchor link handling.

/// What to do with a clicked `href`
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AnchorAction {
    /// Leave the click to its default behavior
    PassThrough,
    /// Suppress the click and do nothing else (`#` or empty fragment)
    Suppress,
    /// Suppress the click and smooth-scroll to the element with this id
    ScrollTo(String),
}

/// Resolve an anchor click.
///
/// Links that act as dropdown toggles are never treated as anchors.
pub fn resolve_anchor(href: &str, is_dropdown_toggle: bool) -> AnchorAction {
    if is_dropdown_toggle || !href.starts_with('#') {
        return AnchorAction::PassThrough;
    }

    let fragment = &href[1..];
    if fragment.trim().is_empty() {
        return AnchorAction::Suppress;
    }

    AnchorAction::ScrollTo(fragment.to_string())
}
