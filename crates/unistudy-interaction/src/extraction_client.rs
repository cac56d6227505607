//! HTTP client for the text-extraction service.
//!
//! `POST {base}/upload` with a multipart file, answered by
//! `{success, extractedText?, message?}`.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use unistudy_core::config::StudyConfig;
use unistudy_core::error::{Result, StudyError};
use unistudy_core::services::{ExtractionService, FileUpload};

use crate::http::{build_client, map_http_error, map_send_error};

/// Client for the remote extraction endpoint.
#[derive(Clone)]
pub struct HttpExtractionService {
    client: Client,
    base_url: String,
}

impl HttpExtractionService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Builds a client from configuration, honoring the request timeout.
    pub fn from_config(config: &StudyConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            base_url: config.extraction_base_url.clone(),
        })
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    success: bool,
    #[serde(rename = "extractedText")]
    extracted_text: Option<String>,
    message: Option<String>,
}

#[async_trait]
impl ExtractionService for HttpExtractionService {
    async fn extract(&self, upload: &FileUpload) -> Result<String> {
        let url = format!("{}/upload", self.base_url);

        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.name.clone())
            .mime_str(&upload.mime_type)
            .map_err(|e| StudyError::internal(format!("Invalid MIME type: {}", e)))?;
        let form = Form::new().part("file", part);

        tracing::debug!("Uploading {} ({} bytes)", upload.name, upload.bytes.len());

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read extraction error body".to_string());
            return Err(map_http_error(status, body));
        }

        let parsed: UploadResponse = response
            .json()
            .await
            .map_err(|e| StudyError::remote(format!("Malformed extraction response: {}", e)))?;

        if !parsed.success {
            return Err(StudyError::remote(
                parsed
                    .message
                    .unwrap_or_else(|| "Extraction failed".to_string()),
            ));
        }

        Ok(parsed.extracted_text.unwrap_or_default())
    }
}
