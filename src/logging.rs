//! Request and response logging utilities with automatic secret redaction.
//!
//! The search client logs every call it makes through this module:
//! - method and URL at info level
//! - headers at debug level, with the integration token always redacted
//! - bodies at trace level, truncated to `NOTION_SEARCH_LOG_MAX_BODY` chars

use crate::constants;
use std::borrow::Cow;
use tracing::{debug, info, trace};

/// Checks if a header name should be redacted
#[must_use]
pub fn should_redact_header(header_name: &str) -> bool {
    let lower = header_name.to_lowercase();
    matches!(
        lower.as_str(),
        "authorization" | "proxy-authorization" | "cookie" | "set-cookie"
    )
}

/// Logs an HTTP request with optional headers and body
pub fn log_request(
    method: &str,
    url: &str,
    headers: Option<&reqwest::header::HeaderMap>,
    body: Option<&str>,
) {
    info!(
        target: "notion_search::client",
        "→ {} {}",
        method.to_uppercase(),
        url
    );

    if let Some(header_map) = headers {
        log_headers("Request headers:", header_map);
    }

    if let Some(body_content) = body {
        trace!(
            target: "notion_search::client",
            "Request body: {}",
            body_content
        );
    }
}

/// Logs an HTTP response with optional headers and body
pub fn log_response(
    status: u16,
    duration_ms: u128,
    headers: Option<&reqwest::header::HeaderMap>,
    body: Option<&str>,
    max_body_len: usize,
) {
    info!(
        target: "notion_search::client",
        "← {} ({}ms)",
        status,
        duration_ms
    );

    if let Some(header_map) = headers {
        log_headers("Response headers:", header_map);
    }

    log_response_body(body, max_body_len);
}

fn log_headers(title: &str, header_map: &reqwest::header::HeaderMap) {
    debug!(target: "notion_search::client", "{}", title);
    for (name, value) in header_map {
        let header_str = name.as_str();
        let display_value = if should_redact_header(header_str) {
            Cow::Borrowed("[REDACTED]")
        } else {
            String::from_utf8_lossy(value.as_bytes())
        };
        debug!(
            target: "notion_search::client",
            "  {}: {}",
            header_str,
            display_value
        );
    }
}

/// The first `max_chars` characters of `body`, or `None` when it already fits.
#[must_use]
pub fn truncate_body(body: &str, max_chars: usize) -> Option<&str> {
    body.char_indices()
        .nth(max_chars)
        .map(|(byte_index, _)| &body[..byte_index])
}

fn log_response_body(body: Option<&str>, max_body_len: usize) {
    let Some(body_content) = body else {
        return;
    };

    if let Some(truncated) = truncate_body(body_content, max_body_len) {
        trace!(
            target: "notion_search::client",
            "Response body: {} (truncated at {} chars)",
            truncated,
            max_body_len
        );
    } else {
        trace!(
            target: "notion_search::client",
            "Response body: {}",
            body_content
        );
    }
}

/// Gets the maximum body length from `NOTION_SEARCH_LOG_MAX_BODY`
#[must_use]
pub fn get_max_body_len() -> usize {
    std::env::var(constants::ENV_LOG_MAX_BODY)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1000)
}
