//! Shared HTTP plumbing for the backend clients.

use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

use unistudy_core::config::StudyConfig;
use unistudy_core::error::{Result, StudyError};

/// The shapes a backend error body may arrive in. The answer and summary
/// endpoints report failures inside their normal payload field; the
/// extraction endpoint uses `message`; some proxies wrap everything in
/// `error`.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
    answer: Option<String>,
    summary: Option<String>,
}

/// Builds a client with the configured per-request timeout.
pub fn build_client(config: &StudyConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| StudyError::internal(format!("Failed to build HTTP client: {}", e)))
}

/// Maps a non-success HTTP response to a remote-service error, pulling the
/// most specific message the body offers.
pub fn map_http_error(status: StatusCode, body: String) -> StudyError {
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|parsed| {
            parsed
                .message
                .or(parsed.error)
                .or(parsed.answer)
                .or(parsed.summary)
        })
        .unwrap_or(body);

    StudyError::remote_with_status(status.as_u16(), message)
}

/// Maps a reqwest send failure: connect/timeout problems are transport
/// errors, anything else still counts as unreachable from the user's view.
pub fn map_send_error(err: reqwest::Error) -> StudyError {
    StudyError::transport(err.to_string())
}
