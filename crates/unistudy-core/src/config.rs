//! Application configuration.

use serde::{Deserialize, Serialize};

/// Base URL the extraction service defaults to (the local Flask-style
/// backend the original deployment ran).
pub const DEFAULT_EXTRACTION_BASE_URL: &str = "http://127.0.0.1:5000";

/// Base URL the answer/summary services default to.
pub const DEFAULT_ASSISTANT_BASE_URL: &str = "http://127.0.0.1:5000";

const fn default_timeout_secs() -> u64 {
    120
}

fn default_extraction_base_url() -> String {
    DEFAULT_EXTRACTION_BASE_URL.to_string()
}

fn default_assistant_base_url() -> String {
    DEFAULT_ASSISTANT_BASE_URL.to_string()
}

/// UniStudy configuration, persisted as `config.toml`.
///
/// The two original front-end variants hard-coded different backend hosts;
/// here both are configuration. A missing file means defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Base URL of the text-extraction service (`POST {base}/upload`)
    #[serde(default = "default_extraction_base_url")]
    pub extraction_base_url: String,
    /// Base URL of the answer/summary services (`POST {base}/ask`,
    /// `POST {base}/summarize`)
    #[serde(default = "default_assistant_base_url")]
    pub assistant_base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            extraction_base_url: default_extraction_base_url(),
            assistant_base_url: default_assistant_base_url(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}
