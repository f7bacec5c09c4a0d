//! Wire types for the Notion `/v1/search` endpoint.

use crate::constants;
use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Body of a search request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub page_size: u32,
    pub sort: SearchSort,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchSort {
    pub direction: String,
    pub timestamp: String,
}

impl SearchRequest {
    /// One page of results, newest edits first.
    #[must_use]
    pub fn newest_first(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page_size: constants::SEARCH_PAGE_SIZE,
            sort: SearchSort {
                direction: constants::SORT_DIRECTION_DESCENDING.to_string(),
                timestamp: constants::SORT_TIMESTAMP_LAST_EDITED.to_string(),
            },
        }
    }
}

/// Body of a successful search response. Only `results` is read.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "lenient_results")]
    pub results: Vec<SearchResult>,
}

/// One object returned by the search endpoint, tagged by its `object` field.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "object", rename_all = "snake_case")]
pub enum SearchResult {
    Page(Page),
    DataSource(Source),
    Database(Source),
    /// Any object kind the tool does not list.
    #[serde(other)]
    Other,
}

/// A page: its title lives in the title-typed entry of `properties`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Page {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_edited_time: String,
    #[serde(default, deserialize_with = "lenient_properties")]
    pub properties: Properties,
}

/// A data source or database: may carry a top-level `title`, `properties`, or both.
///
/// Here `properties` is a schema, so its title entry is usually `{"title": {}}`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Source {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_edited_time: String,
    #[serde(default, deserialize_with = "lenient_rich_text")]
    pub title: Option<Vec<RichText>>,
    #[serde(default, deserialize_with = "lenient_properties")]
    pub properties: Properties,
}

/// Named properties in the order the server sent them.
pub type Properties = IndexMap<String, Property>;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Property {
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: String,
    /// Present only on title-typed properties.
    #[serde(default, deserialize_with = "lenient_rich_text")]
    pub title: Option<Vec<RichText>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RichText {
    #[serde(default, deserialize_with = "lenient_string")]
    pub plain_text: String,
}

impl SearchResult {
    /// The `object` tag this result was deserialized from.
    #[must_use]
    pub const fn kind(&self) -> Option<&'static str> {
        match self {
            Self::Page(_) => Some(constants::OBJECT_PAGE),
            Self::DataSource(_) => Some(constants::OBJECT_DATA_SOURCE),
            Self::Database(_) => Some(constants::OBJECT_DATABASE),
            Self::Other => None,
        }
    }

    #[must_use]
    pub const fn is_page(&self) -> bool {
        matches!(self, Self::Page(_))
    }

    #[must_use]
    pub const fn is_source(&self) -> bool {
        matches!(self, Self::DataSource(_) | Self::Database(_))
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Page(page) => &page.id,
            Self::DataSource(source) | Self::Database(source) => &source.id,
            Self::Other => "",
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Page(page) => &page.url,
            Self::DataSource(source) | Self::Database(source) => &source.url,
            Self::Other => "",
        }
    }

    /// The raw `last_edited_time` string as sent by the server.
    #[must_use]
    pub fn last_edited_time(&self) -> &str {
        match self {
            Self::Page(page) => &page.last_edited_time,
            Self::DataSource(source) | Self::Database(source) => &source.last_edited_time,
            Self::Other => "",
        }
    }

    /// `last_edited_time` parsed as an RFC 3339 timestamp.
    ///
    /// Unparseable or missing timestamps yield `None`, which sorts as the oldest.
    #[must_use]
    pub fn last_edited_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.last_edited_time()).ok()
    }
}

/// Decodes each result on its own; a record that still fails is skipped.
fn lenient_results<'de, D>(deserializer: D) -> Result<Vec<SearchResult>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(values) = Option::<Vec<Value>>::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(result) => Some(result),
            Err(e) => {
                warn!(error = %e, "Skipping search result that could not be decoded");
                None
            }
        })
        .collect())
}

/// `null`, missing or non-string values read as "".
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// `null` reads as absent. An array is decoded segment by segment. Any other
/// value (a schema's `{}`) is present but carries no text.
fn lenient_rich_text<'de, D>(deserializer: D) -> Result<Option<Vec<RichText>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Array(segments) => Some(
            segments
                .into_iter()
                .map(|segment| serde_json::from_value(segment).unwrap_or_default())
                .collect(),
        ),
        _ => Some(Vec::new()),
    })
}

/// Anything but an object of properties reads as empty.
fn lenient_properties<'de, D>(deserializer: D) -> Result<Properties, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(Properties::new());
    };
    Ok(entries
        .into_iter()
        .map(|(name, property)| (name, serde_json::from_value(property).unwrap_or_default()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(SearchRequest::newest_first("Tokyo")).unwrap();
        assert_eq!(
            body,
            json!({
                "query": "Tokyo",
                "page_size": 100,
                "sort": {"direction": "descending", "timestamp": "last_edited_time"}
            })
        );
    }

    #[test]
    fn test_missing_or_null_results_is_empty() {
        let missing: SearchResponse = serde_json::from_value(json!({"object": "list"})).unwrap();
        assert!(missing.results.is_empty());
        let null: SearchResponse = serde_json::from_value(json!({"results": null})).unwrap();
        assert!(null.results.is_empty());
    }

    #[test]
    fn test_results_are_tagged_by_object() {
        let response: SearchResponse = serde_json::from_value(json!({
            "results": [
                {"object": "page", "id": "p1", "url": "https://notion.so/p1",
                 "last_edited_time": "2024-06-01T00:00:00.000Z", "properties": {}},
                {"object": "data_source", "id": "ds1", "title": [{"plain_text": "Trips"}]},
                {"object": "database", "id": "db1", "title": null},
                {"object": "user", "id": "u1"}
            ]
        }))
        .unwrap();

        let kinds: Vec<_> = response.results.iter().map(SearchResult::kind).collect();
        assert_eq!(
            kinds,
            vec![Some("page"), Some("data_source"), Some("database"), None]
        );
        assert_eq!(response.results[1].id(), "ds1");
        assert_eq!(response.results[3], SearchResult::Other);
    }

    #[test]
    fn test_schema_title_and_null_fields_do_not_reject_response() {
        let body = r#"{
            "object": "list",
            "results": [
                {"object": "page", "id": "p1", "url": null, "last_edited_time": "2024-06-01T00:00:00.000Z",
                 "properties": {"Name": {"id": "title", "type": "title", "title": [{"plain_text": "Sapporo"}]}}},
                {"object": "data_source", "id": null, "url": "https://www.notion.so/ds1",
                 "last_edited_time": "2024-05-01T00:00:00.000Z",
                 "properties": {"Name": {"id": "title", "name": "Name", "type": "title", "title": {}}}}
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].url(), "");
        assert_eq!(response.results[1].id(), "");
        let SearchResult::DataSource(source) = &response.results[1] else {
            panic!("expected a data source");
        };
        assert_eq!(source.properties["Name"].kind, "title");
        assert_eq!(source.properties["Name"].title, Some(Vec::new()));
    }

    #[test]
    fn test_undecodable_record_is_skipped() {
        let response: SearchResponse = serde_json::from_value(json!({
            "results": [
                {"id": "no-object-tag"},
                {"object": "database", "id": "db1", "title": "not rich text"}
            ]
        }))
        .unwrap();

        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].id(), "db1");
    }

    #[test]
    fn test_properties_keep_server_order() {
        let page: Page = serde_json::from_value(json!({
            "properties": {
                "Zeta": {"type": "rich_text"},
                "Alpha": {"type": "title", "title": []},
                "Mid": {"type": "date"}
            }
        }))
        .unwrap();
        let keys: Vec<_> = page.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_last_edited_at_parses_rfc3339() {
        let result = SearchResult::Page(Page {
            last_edited_time: "2024-01-05T10:00:00.000Z".to_string(),
            ..Page::default()
        });
        assert!(result.last_edited_at().is_some());

        let garbage = SearchResult::Page(Page {
            last_edited_time: "yesterday".to_string(),
            ..Page::default()
        });
        assert!(garbage.last_edited_at().is_none());
    }
}
