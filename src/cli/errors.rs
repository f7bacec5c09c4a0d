//! Error display formatting for the CLI.

use crate::error::Error;

/// Prints an error message, either as JSON or user-friendly format.
pub fn print_error_with_json(error: &Error, json_format: bool) {
    if !json_format {
        print_error(error);
        return;
    }
    let json_error = error.to_json();
    let Ok(json_output) = serde_json::to_string_pretty(&json_error) else {
        print_error(error);
        return;
    };
    eprintln!("{json_output}");
}

/// Prints a user-friendly error message with a hint when one applies.
pub fn print_error(error: &Error) {
    eprintln!("{}", format_error(error));
}

/// The single line `print_error` writes: category, error, and an optional hint.
///
/// Runs of whitespace, including newlines in an API response body, become one space.
#[must_use]
pub fn format_error(error: &Error) -> String {
    let title = error_title(error);
    let message = error.to_string().split_whitespace().collect::<Vec<_>>().join(" ");
    error.hint().map_or_else(
        || format!("{title}: {message}"),
        |hint| format!("{title}: {message} (Hint: {hint})"),
    )
}

fn error_title(error: &Error) -> &'static str {
    match error {
        Error::MissingCredential { .. } | Error::Config(_) => "Configuration Error",
        Error::Network(req_err) if req_err.is_connect() => "Connection Error",
        Error::Network(req_err) if req_err.is_timeout() => "Timeout Error",
        Error::Api { .. } | Error::Network(_) => match error.status_code() {
            Some(401) => "Authentication Error",
            Some(403) => "Permission Error",
            Some(404) => "Not Found Error",
            Some(429) => "Rate Limited",
            Some(500..=599) => "Server Error",
            Some(_) => "HTTP Error",
            None => "Network Error",
        },
        Error::Json(_) => "JSON Parsing Error",
        Error::Io(_) => "Output Error",
    }
}
