//! Keyword search with a title-match fallback, and the newest-first listing
//!
//! The search endpoint matches on its own terms and sometimes returns
//! nothing for a keyword that clearly appears in page titles. When that
//! happens the workspace is searched again with an empty query and the
//! pages are filtered locally by title.

use crate::constants;
use crate::error::Error;
use crate::notion::title::page_title;
use crate::notion::{SearchApi, SearchResult};
use std::cmp::Reverse;
use tracing::{info, warn};

/// Results of a keyword search, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub results: Vec<SearchResult>,
    /// Whether the results came from the empty-query fallback.
    pub fallback_used: bool,
}

/// What gets printed: the newest pages and the newest data sources / databases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub keyword: String,
    pub fallback_used: bool,
    pub pages: Vec<SearchResult>,
    pub sources: Vec<SearchResult>,
}

/// Searches for `keyword` and classifies the results.
///
/// # Errors
/// Returns the primary search error. Fallback errors are logged and dropped.
pub async fn run<A: SearchApi>(api: &A, keyword: &str) -> Result<Listing, Error> {
    let outcome = search_with_fallback(api, keyword).await?;
    Ok(classify(keyword, outcome))
}

/// Runs the primary search and, only when it comes back empty, the fallback.
///
/// # Errors
/// Returns the primary search error unchanged.
pub async fn search_with_fallback<A: SearchApi>(
    api: &A,
    keyword: &str,
) -> Result<SearchOutcome, Error> {
    let results = api.search(keyword).await?;
    if !results.is_empty() {
        info!(keyword, count = results.len(), "Primary search returned results");
        return Ok(SearchOutcome {
            results,
            fallback_used: false,
        });
    }

    info!(keyword, "No results for keyword, retrying with an empty query");
    let all = match api.search("").await {
        Ok(all) => all,
        Err(e) => {
            warn!(error = %e, "Fallback search failed, continuing without results");
            Vec::new()
        }
    };

    Ok(SearchOutcome {
        results: filter_by_page_title(all, keyword),
        fallback_used: true,
    })
}

/// Keeps pages whose title contains `keyword` (case-sensitive).
#[must_use]
pub fn filter_by_page_title(results: Vec<SearchResult>, keyword: &str) -> Vec<SearchResult> {
    results
        .into_iter()
        .filter(|item| item.is_page() && page_title(item).contains(keyword))
        .collect()
}

/// Splits results into pages and sources, each newest first and capped.
#[must_use]
pub fn classify(keyword: &str, outcome: SearchOutcome) -> Listing {
    let (pages, rest): (Vec<_>, Vec<_>) = outcome
        .results
        .into_iter()
        .partition(SearchResult::is_page);
    let sources = rest.into_iter().filter(SearchResult::is_source).collect();

    Listing {
        keyword: keyword.to_string(),
        fallback_used: outcome.fallback_used,
        pages: newest_first(pages, constants::DISPLAY_LIMIT),
        sources: newest_first(sources, constants::DISPLAY_LIMIT),
    }
}

/// Stable sort by last-edited time, newest first, truncated to `limit`.
///
/// Results whose timestamp does not parse sort after all others.
#[must_use]
pub fn newest_first(mut items: Vec<SearchResult>, limit: usize) -> Vec<SearchResult> {
    items.sort_by_cached_key(|item| Reverse(item.last_edited_at()));
    items.truncate(limit);
    items
}
