//! HTTP client for the Notion search endpoint.

use std::future::Future;
use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, instrument};

use super::models::{SearchRequest, SearchResponse, SearchResult};
use crate::config::Settings;
use crate::constants;
use crate::error::Error;
use crate::logging;

/// Anything that can answer a search query with one page of results.
pub trait SearchApi {
    /// Runs one search request for `query`.
    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<SearchResult>, Error>>;
}

/// Client for `POST /v1/search`.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http_client: reqwest::Client,
    endpoint: String,
    headers: HeaderMap,
}

impl SearchClient {
    /// Creates a client authenticated with the token in `settings`.
    ///
    /// # Errors
    /// Returns `Error::Config` if the token or API version cannot be sent as
    /// a header value, or `Error::Network` if the HTTP client fails to build.
    pub fn new(settings: &Settings) -> Result<Self, Error> {
        install_crypto_provider();

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            endpoint: settings.endpoint.clone(),
            headers: build_headers(&settings.token, &settings.notion_version)?,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchApi for SearchClient {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, Error> {
        let body = serde_json::to_string(&SearchRequest::newest_first(query))?;
        logging::log_request("POST", &self.endpoint, Some(&self.headers), Some(&body));

        let started = Instant::now();
        let response = self
            .http_client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let response_headers = response.headers().clone();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            logging::log_response(
                status.as_u16(),
                started.elapsed().as_millis(),
                Some(&response_headers),
                Some(&text),
                logging::get_max_body_len(),
            );
            return Err(Error::api(status, text));
        }

        let text = response.text().await?;
        logging::log_response(
            status.as_u16(),
            started.elapsed().as_millis(),
            Some(&response_headers),
            Some(&text),
            logging::get_max_body_len(),
        );

        let parsed: SearchResponse = serde_json::from_str(&text)?;
        debug!(result_count = parsed.results.len(), "Search completed");
        Ok(parsed.results)
    }
}

fn build_headers(token: &str, notion_version: &str) -> Result<HeaderMap, Error> {
    let mut auth = HeaderValue::from_str(&format!("{} {token}", constants::HEADER_BEARER))
        .map_err(|_| {
            Error::Config(format!(
                "{} contains characters that cannot be sent in an HTTP header",
                constants::ENV_NOTION_API_KEY
            ))
        })?;
    auth.set_sensitive(true);

    let version = HeaderValue::from_str(notion_version).map_err(|_| {
        Error::Config(format!(
            "{} is not a valid header value: '{notion_version}'",
            constants::ENV_NOTION_VERSION
        ))
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static("authorization"), auth);
    headers.insert(HeaderName::from_static("notion-version"), version);
    headers.insert(
        HeaderName::from_static("content-type"),
        HeaderValue::from_static(constants::CONTENT_TYPE_JSON),
    );
    Ok(headers)
}

/// Installs the process-wide rustls crypto provider once.
fn install_crypto_provider() {
    #[cfg(not(windows))]
    let provider = rustls::crypto::ring::default_provider();
    #[cfg(windows)]
    let provider = rustls::crypto::aws_lc_rs::default_provider();

    // Already installed by an earlier client.
    let _ = provider.install_default();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers() {
        let headers = build_headers("secret_abc", "2025-09-03").unwrap();
        assert_eq!(headers[constants::HEADER_AUTHORIZATION], "Bearer secret_abc");
        assert!(headers[constants::HEADER_AUTHORIZATION].is_sensitive());
        assert_eq!(headers[constants::HEADER_NOTION_VERSION], "2025-09-03");
        assert_eq!(headers[constants::HEADER_CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_token_with_newline_is_rejected() {
        let result = build_headers("secret_abc\n", "2025-09-03");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_client_uses_configured_endpoint() {
        let settings = Settings {
            token: "secret_abc".to_string(),
            keyword: "Tokyo".to_string(),
            endpoint: "http://127.0.0.1:1/v1/search".to_string(),
            notion_version: constants::DEFAULT_NOTION_VERSION.to_string(),
            timeout: None,
        };
        let client = SearchClient::new(&settings).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:1/v1/search");
    }
}
