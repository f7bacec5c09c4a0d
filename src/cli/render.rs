//! Rendering layer for [`Listing`] values.
//!
//! Converts a classified listing into user-facing output in the requested
//! format (text, JSON, table). This module owns all stdout writes for the
//! search results.

use crate::cli::OutputFormat;
use crate::constants;
use crate::error::Error;
use crate::notion::title::{page_title, title_from_any};
use crate::notion::SearchResult;
use crate::search::Listing;
use serde::Serialize;
use std::io::Write;
use tabled::{Table, Tabled};

/// One listed result in the shape used by the JSON and table formats.
#[derive(Debug, Serialize, Tabled, PartialEq, Eq)]
pub struct ListedItem {
    #[tabled(rename = "Kind")]
    pub kind: &'static str,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "URL")]
    pub url: String,
    #[tabled(rename = "Last edited")]
    pub last_edited_time: String,
    #[tabled(rename = "ID")]
    pub id: String,
}

#[derive(Debug, Serialize)]
struct JsonListing<'a> {
    keyword: &'a str,
    fallback_used: bool,
    pages: Vec<ListedItem>,
    sources: Vec<ListedItem>,
}

/// Writes `listing` to `out` in `format`.
///
/// # Errors
/// Returns an error if writing fails or the JSON cannot be serialized.
pub fn render<W: Write>(listing: &Listing, format: OutputFormat, out: &mut W) -> Result<(), Error> {
    match format {
        OutputFormat::Text => render_text(listing, out),
        OutputFormat::Json => render_json(listing, out),
        OutputFormat::Table => render_table(listing, out),
    }
}

/// The line-oriented listing.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn render_text<W: Write>(listing: &Listing, out: &mut W) -> Result<(), Error> {
    writeln!(out, "{}", pages_header(&listing.keyword))?;
    for page in &listing.pages {
        writeln!(
            out,
            "{} | {} | last edited: {}",
            page_title(page),
            page.url(),
            page.last_edited_time()
        )?;
    }

    if listing.sources.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{}", constants::SOURCES_HEADER)?;
    for source in &listing.sources {
        writeln!(
            out,
            "{} | {} | URL: {} | last edited: {}",
            source_label(source),
            title_from_any(source),
            source.url(),
            source.last_edited_time()
        )?;
        if matches!(source, SearchResult::DataSource(_)) {
            writeln!(out, "  data_source_id: {}", source.id())?;
        }
    }
    Ok(())
}

fn render_json<W: Write>(listing: &Listing, out: &mut W) -> Result<(), Error> {
    let json = JsonListing {
        keyword: &listing.keyword,
        fallback_used: listing.fallback_used,
        pages: listing.pages.iter().map(to_listed_item).collect(),
        sources: listing.sources.iter().map(to_listed_item).collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)?;
    Ok(())
}

fn render_table<W: Write>(listing: &Listing, out: &mut W) -> Result<(), Error> {
    writeln!(out, "{}", pages_header(&listing.keyword))?;
    let pages: Vec<_> = listing.pages.iter().map(to_listed_item).collect();
    if !pages.is_empty() {
        writeln!(out, "{}", Table::new(&pages))?;
    }

    if listing.sources.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{}", constants::SOURCES_HEADER)?;
    let sources: Vec<_> = listing.sources.iter().map(to_listed_item).collect();
    writeln!(out, "{}", Table::new(&sources))?;
    Ok(())
}

fn pages_header(keyword: &str) -> String {
    format!(
        "== Pages (most recently edited, max {}) | keyword=\"{keyword}\" ==",
        constants::DISPLAY_LIMIT
    )
}

const fn source_label(item: &SearchResult) -> &'static str {
    match item {
        SearchResult::DataSource(_) => constants::LABEL_DATA_SOURCE,
        _ => constants::LABEL_DATABASE,
    }
}

/// Flattens a result into its listed form, using the title rule for its kind.
#[must_use]
pub fn to_listed_item(item: &SearchResult) -> ListedItem {
    let title = if item.is_page() {
        page_title(item)
    } else {
        title_from_any(item)
    };
    ListedItem {
        kind: item.kind().unwrap_or("unknown"),
        title,
        url: item.url().to_string(),
        last_edited_time: item.last_edited_time().to_string(),
        id: item.id().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notion::models::{Page, Properties, RichText, Source};
    use serde_json::json;

    fn page(id: &str, title: &str, edited: &str) -> SearchResult {
        let properties: Properties = serde_json::from_value(json!({
            "title": {"type": "title", "title": [{"plain_text": title}]}
        }))
        .unwrap();
        SearchResult::Page(Page {
            id: id.to_string(),
            url: format!("https://www.notion.so/{id}"),
            last_edited_time: edited.to_string(),
            properties,
        })
    }

    fn source(id: &str, title: &str, edited: &str) -> Source {
        Source {
            id: id.to_string(),
            url: format!("https://www.notion.so/{id}"),
            last_edited_time: edited.to_string(),
            title: Some(vec![RichText {
                plain_text: title.to_string(),
            }]),
            properties: Properties::new(),
        }
    }

    fn text(listing: &Listing) -> String {
        let mut out = Vec::new();
        render(listing, OutputFormat::Text, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_pages_and_database() {
        let listing = Listing {
            keyword: "Tokyo".to_string(),
            fallback_used: false,
            pages: vec![page("p1", "Tokyo Notes", "2024-06-01T00:00:00.000Z")],
            sources: vec![SearchResult::Database(source(
                "db1",
                "Tokyo DB",
                "2024-05-01T00:00:00.000Z",
            ))],
        };

        assert_eq!(
            text(&listing),
            "== Pages (most recently edited, max 10) | keyword=\"Tokyo\" ==\n\
             Tokyo Notes | https://www.notion.so/p1 | last edited: 2024-06-01T00:00:00.000Z\n\
             \n\
             == Data Sources / Databases ==\n\
             DATABASE | Tokyo DB | URL: https://www.notion.so/db1 | last edited: 2024-05-01T00:00:00.000Z\n"
        );
    }

    #[test]
    fn test_text_data_source_prints_id_line() {
        let listing = Listing {
            keyword: "Trips".to_string(),
            fallback_used: false,
            pages: vec![],
            sources: vec![SearchResult::DataSource(source(
                "ds1",
                "Trips",
                "2024-05-01T00:00:00.000Z",
            ))],
        };

        let output = text(&listing);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "== Pages (most recently edited, max 10) | keyword=\"Trips\" ==",
                "",
                "== Data Sources / Databases ==",
                "DATA_SOURCE | Trips | URL: https://www.notion.so/ds1 | last edited: 2024-05-01T00:00:00.000Z",
                "  data_source_id: ds1",
            ]
        );
    }

    #[test]
    fn test_text_empty_listing_is_header_only() {
        let listing = Listing {
            keyword: "北海道".to_string(),
            fallback_used: true,
            pages: vec![],
            sources: vec![],
        };
        assert_eq!(
            text(&listing),
            "== Pages (most recently edited, max 10) | keyword=\"北海道\" ==\n"
        );
    }

    #[test]
    fn test_json_output() {
        let listing = Listing {
            keyword: "Tokyo".to_string(),
            fallback_used: true,
            pages: vec![page("p1", "Tokyo Notes", "2024-06-01T00:00:00.000Z")],
            sources: vec![],
        };
        let mut out = Vec::new();
        render(&listing, OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(
            value,
            json!({
                "keyword": "Tokyo",
                "fallback_used": true,
                "pages": [{
                    "kind": "page",
                    "title": "Tokyo Notes",
                    "url": "https://www.notion.so/p1",
                    "last_edited_time": "2024-06-01T00:00:00.000Z",
                    "id": "p1"
                }],
                "sources": []
            })
        );
    }

    #[test]
    fn test_table_output_contains_rows() {
        let listing = Listing {
            keyword: "Tokyo".to_string(),
            fallback_used: false,
            pages: vec![page("p1", "Tokyo Notes", "2024-06-01T00:00:00.000Z")],
            sources: vec![SearchResult::DataSource(source(
                "ds1",
                "Trips",
                "2024-05-01T00:00:00.000Z",
            ))],
        };
        let mut out = Vec::new();
        render(&listing, OutputFormat::Table, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("Tokyo Notes"));
        assert!(output.contains("Last edited"));
        assert!(output.contains("data_source"));
        assert!(output.contains(constants::SOURCES_HEADER));
    }
}
