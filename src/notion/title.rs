//! Display titles for search results.
//!
//! Pages keep their title in the title-typed property. Data sources and
//! databases usually carry a top-level `title`, but may only have the
//! property form, so [`title_from_any`] falls back to it.

use super::models::{Properties, RichText, SearchResult};
use crate::constants;

/// Concatenates the plain text of every segment, in order.
#[must_use]
pub fn rich_text_to_plain(segments: &[RichText]) -> String {
    segments
        .iter()
        .map(|segment| segment.plain_text.as_str())
        .collect()
}

/// Title held by the first title-typed property, or `""` if there is none.
#[must_use]
pub fn title_from_properties(properties: &Properties) -> String {
    properties
        .values()
        .find(|property| property.kind == constants::PROPERTY_TYPE_TITLE)
        .map(|property| {
            property
                .title
                .as_deref()
                .map(rich_text_to_plain)
                .unwrap_or_default()
        })
        .unwrap_or_default()
}

/// Top-level `title` when present, otherwise the properties title.
#[must_use]
pub fn title_from_any(item: &SearchResult) -> String {
    match item {
        SearchResult::Page(page) => title_from_properties(&page.properties),
        SearchResult::DataSource(source) | SearchResult::Database(source) => {
            source.title.as_deref().map_or_else(
                || title_from_properties(&source.properties),
                rich_text_to_plain,
            )
        }
        SearchResult::Other => String::new(),
    }
}

/// The title a page-kind result is listed and matched under.
///
/// Only the properties rule applies; non-page results have no page title.
#[must_use]
pub fn page_title(item: &SearchResult) -> String {
    match item {
        SearchResult::Page(page) => title_from_properties(&page.properties),
        _ => String::new(),
    }
}
