//! Fragment (hash) routing.

const POEM_PREFIX: &str = "poem/";

/// Destination addressed by a location fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Empty fragment: the list view.
    List,
    /// `poem/<slug>`: single-poem view.
    Poem(String),
    /// Anything else; ignored by the controller.
    Unknown,
}

/// Parses a fragment with or without its leading `#`.
///
/// Only the first path segment after `poem/` is used as slug, so
/// `#poem/a/extra` addresses `a`.
pub fn parse_fragment(fragment: &str) -> Route {
    let fragment = fragment.trim();
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    if fragment.is_empty() {
        return Route::List;
    }

    match fragment.strip_prefix(POEM_PREFIX) {
        Some(rest) => match rest.split('/').next() {
            Some(slug) if !slug.is_empty() => Route::Poem(slug.to_string()),
            _ => Route::Unknown,
        },
        None => Route::Unknown,
    }
}
