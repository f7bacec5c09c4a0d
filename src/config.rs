//! Runtime settings assembled from the environment and the command line.
//!
//! The tool has no configuration file. Everything it needs comes from
//! `NOTION_API_KEY`, a handful of optional `NOTION_SEARCH_*` overrides and
//! the positional keyword.

use crate::constants;
use crate::error::Error;
use std::time::Duration;

/// Everything a search run needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub token: String,
    pub keyword: String,
    pub endpoint: String,
    pub notion_version: String,
    pub timeout: Option<Duration>,
}

impl Settings {
    /// Resolves settings from the process environment.
    ///
    /// # Errors
    /// Returns `Error::MissingCredential` if `NOTION_API_KEY` is unset or
    /// empty, and `Error::Config` if an override holds an invalid value.
    pub fn from_env(keyword: Option<String>) -> Result<Self, Error> {
        Self::from_lookup(keyword, |name| std::env::var(name).ok())
    }

    /// Resolves settings using `lookup` in place of the process environment.
    ///
    /// # Errors
    /// Same as [`Settings::from_env`].
    pub fn from_lookup<F>(keyword: Option<String>, lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(constants::ENV_NOTION_API_KEY)
            .filter(|value| !value.is_empty())
            .ok_or(Error::MissingCredential {
                var: constants::ENV_NOTION_API_KEY,
            })?;

        let endpoint = lookup(constants::ENV_SEARCH_API_URL)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| constants::DEFAULT_SEARCH_URL.to_string());

        let notion_version = lookup(constants::ENV_NOTION_VERSION)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| constants::DEFAULT_NOTION_VERSION.to_string());

        let timeout = lookup(constants::ENV_TIMEOUT_SECS)
            .filter(|value| !value.is_empty())
            .map(|value| parse_timeout(&value))
            .transpose()?;

        Ok(Self {
            token,
            keyword: keyword.unwrap_or_else(|| constants::DEFAULT_KEYWORD.to_string()),
            endpoint,
            notion_version,
            timeout,
        })
    }
}

fn parse_timeout(value: &str) -> Result<Duration, Error> {
    match value.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(Error::Config(format!(
            "{} must be a positive number of seconds, got '{value}'",
            constants::ENV_TIMEOUT_SECS
        ))),
        Ok(secs) => Ok(Duration::from_secs(secs)),
    }
}
