//! Shared test utilities

#![allow(dead_code)]

use serde_json::{json, Value};
use std::path::PathBuf;

/// Cached binary path for the notion-search CLI to avoid repeated lookups
#[allow(deprecated)]
pub static NOTION_SEARCH_BIN: std::sync::LazyLock<PathBuf> =
    std::sync::LazyLock::new(|| assert_cmd::cargo::cargo_bin("notion-search"));

pub const TEST_TOKEN: &str = "secret_test_token";

/// Test helper to create a command with the cached binary and a clean environment
pub fn notion_search_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(&*NOTION_SEARCH_BIN);
    for var in [
        "NOTION_API_KEY",
        "NOTION_SEARCH_API_URL",
        "NOTION_SEARCH_NOTION_VERSION",
        "NOTION_SEARCH_TIMEOUT_SECS",
        "NOTION_SEARCH_LOG",
        "NOTION_SEARCH_LOG_FORMAT",
        "NOTION_SEARCH_LOG_FILE",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Search URL served by a mock server
pub fn search_url(server_uri: &str) -> String {
    format!("{server_uri}/v1/search")
}

/// The request body the client sends for `query`
pub fn search_body(query: &str) -> Value {
    json!({
        "query": query,
        "page_size": 100,
        "sort": {"direction": "descending", "timestamp": "last_edited_time"}
    })
}

pub fn page_json(id: &str, title: &str, edited: &str) -> Value {
    json!({
        "object": "page",
        "id": id,
        "url": format!("https://www.notion.so/{id}"),
        "last_edited_time": edited,
        "properties": {
            "Tags": {"type": "multi_select", "multi_select": []},
            "Name": {"type": "title", "title": [{"type": "text", "plain_text": title}]}
        }
    })
}

/// A data source or database as search returns it: a property schema, not values
pub fn source_json(object: &str, id: &str, title: &str, edited: &str) -> Value {
    json!({
        "object": object,
        "id": id,
        "url": format!("https://www.notion.so/{id}"),
        "last_edited_time": edited,
        "title": [{"type": "text", "plain_text": title}],
        "properties": {
            "Name": {"id": "title", "name": "Name", "type": "title", "title": {}},
            "Tags": {"id": "tags", "name": "Tags", "type": "multi_select", "multi_select": {"options": []}},
            "Updated": {"id": "upd", "name": "Updated", "type": "last_edited_time", "last_edited_time": {}}
        }
    })
}

pub fn results_json(results: Vec<Value>) -> Value {
    json!({"object": "list", "results": results, "has_more": false})
}
