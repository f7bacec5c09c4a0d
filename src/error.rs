use crate::constants;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("environment variable {var} is not set")]
    MissingCredential { var: &'static str },
    #[error("HTTP {status} {status_text} {body}")]
    Api {
        status: u16,
        status_text: String,
        body: String,
    },
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Config(String),
}

/// JSON representation of an error for structured output
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonError {
    pub error_type: String,
    pub message: String,
    pub context: Option<String>,
}

impl Error {
    /// Builds an API error from a non-success response.
    #[must_use]
    pub fn api(status: reqwest::StatusCode, body: String) -> Self {
        Self::Api {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        }
    }

    /// Returns the HTTP status code carried by this error, if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The hint shown under the diagnostic, when one applies.
    #[must_use]
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingCredential { .. } => Some(constants::ERR_MISSING_CREDENTIAL),
            Self::Network(e) if e.is_connect() => Some(constants::ERR_CONNECTION),
            Self::Network(e) if e.is_timeout() => Some(constants::ERR_TIMEOUT),
            Self::Json(_) => Some(constants::ERR_JSON_SYNTAX),
            Self::Api { .. } | Self::Network(_) => {
                self.status_code().and_then(|status| match status {
                    400 => Some(constants::ERR_BAD_REQUEST),
                    401 => Some(constants::ERR_API_CREDENTIALS),
                    403 => Some(constants::ERR_PERMISSION_DENIED),
                    404 => Some(constants::ERR_ENDPOINT_NOT_FOUND),
                    429 => Some(constants::ERR_RATE_LIMITED),
                    500..=599 => Some(constants::ERR_SERVER_ERROR),
                    _ => None,
                })
            }
            Self::Io(_) | Self::Config(_) => None,
        }
    }

    /// Convert error to JSON representation for structured output
    #[must_use]
    pub fn to_json(&self) -> JsonError {
        let error_type = match self {
            Self::MissingCredential { .. } | Self::Config(_) => "Configuration",
            Self::Api { .. } => "Api",
            Self::Network(_) => "Network",
            Self::Json(_) => "JSONParsing",
            Self::Io(_) => "FileSystem",
        };

        JsonError {
            error_type: error_type.to_string(),
            message: self.to_string(),
            context: self.hint().map(str::to_string),
        }
    }
}
