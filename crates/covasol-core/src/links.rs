//! Classification of clicked links.

/// Selector for a same-document fragment link, e.g. `#fleet`.
/// The bare `#` and non-fragment hrefs yield `None`.
#[inline]
pub fn fragment_selector(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Whether a click on `href` should play the page-transition overlay: it must
/// leave the current page and must not be a fragment.
#[inline]
pub fn is_transition_target(href: &str, current_path: &str) -> bool {
    !href.is_empty() && href != current_path && !href.starts_with('#')
}
