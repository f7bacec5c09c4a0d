//! Centralized string constants for the notion-search CLI
//!
//! This module contains commonly used string literals to:
//! - Reduce string duplication
//! - Keep the wire contract with the Notion API in one place
//! - Ensure consistency between the client, the renderer and the tests

// HTTP Headers
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_NOTION_VERSION: &str = "Notion-Version";
pub const HEADER_BEARER: &str = "Bearer";

// Content Types
pub const CONTENT_TYPE_JSON: &str = "application/json";

// Notion search endpoint
pub const DEFAULT_SEARCH_URL: &str = "https://api.notion.com/v1/search";
pub const DEFAULT_NOTION_VERSION: &str = "2025-09-03";
pub const SEARCH_PAGE_SIZE: u32 = 100;
pub const SORT_DIRECTION_DESCENDING: &str = "descending";
pub const SORT_TIMESTAMP_LAST_EDITED: &str = "last_edited_time";

// Object kinds returned by the search endpoint
pub const OBJECT_PAGE: &str = "page";
pub const OBJECT_DATA_SOURCE: &str = "data_source";
pub const OBJECT_DATABASE: &str = "database";
pub const PROPERTY_TYPE_TITLE: &str = "title";

// Search behaviour
pub const DEFAULT_KEYWORD: &str = "北海道";
pub const DISPLAY_LIMIT: usize = 10;

// Environment Variables
pub const ENV_NOTION_API_KEY: &str = "NOTION_API_KEY";
pub const ENV_SEARCH_API_URL: &str = "NOTION_SEARCH_API_URL";
pub const ENV_NOTION_VERSION: &str = "NOTION_SEARCH_NOTION_VERSION";
pub const ENV_TIMEOUT_SECS: &str = "NOTION_SEARCH_TIMEOUT_SECS";
pub const ENV_LOG: &str = "NOTION_SEARCH_LOG";
pub const ENV_LOG_FORMAT: &str = "NOTION_SEARCH_LOG_FORMAT";
pub const ENV_LOG_FILE: &str = "NOTION_SEARCH_LOG_FILE";
pub const ENV_LOG_MAX_BODY: &str = "NOTION_SEARCH_LOG_MAX_BODY";

// Output labels
pub const LABEL_DATA_SOURCE: &str = "DATA_SOURCE";
pub const LABEL_DATABASE: &str = "DATABASE";
pub const SOURCES_HEADER: &str = "== Data Sources / Databases ==";

// Error Context Messages
pub const ERR_MISSING_CREDENTIAL: &str =
    "Set it to a Notion internal integration token (starts with secret_ or ntn_).";
pub const ERR_API_CREDENTIALS: &str =
    "Check that NOTION_API_KEY holds a valid internal integration token.";
pub const ERR_PERMISSION_DENIED: &str =
    "Share the pages or databases you want to search with the integration.";
pub const ERR_ENDPOINT_NOT_FOUND: &str =
    "Check NOTION_SEARCH_API_URL; it should point at the /v1/search endpoint.";
pub const ERR_BAD_REQUEST: &str =
    "The API rejected the request. Check NOTION_SEARCH_NOTION_VERSION.";
pub const ERR_RATE_LIMITED: &str = "You're making requests too quickly. Wait before trying again.";
pub const ERR_SERVER_ERROR: &str = "The API server is experiencing issues. Try again later.";
pub const ERR_CONNECTION: &str = "Check your network connection and that the API is reachable.";
pub const ERR_TIMEOUT: &str =
    "The API did not answer in time. Raise NOTION_SEARCH_TIMEOUT_SECS or try again later.";
pub const ERR_JSON_SYNTAX: &str = "The search response was not the JSON shape the tool expects.";
