//! HTTP client for the answer and summary services.
//!
//! `POST {base}/ask` with `{question, documents, department, chatHistory}`
//! answered by `{answer}`, and `POST {base}/summarize` with
//! `{documents, department}` answered by `{summary}`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;

use unistudy_core::config::StudyConfig;
use unistudy_core::error::{Result, StudyError};
use unistudy_core::services::{AskRequest, AssistantService, SummarizeRequest};

use crate::http::{build_client, map_http_error, map_send_error};

/// Client for the remote answer/summary endpoints.
#[derive(Clone)]
pub struct HttpAssistantService {
    client: Client,
    base_url: String,
}

impl HttpAssistantService {
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
            base_url: config.assistant_base_url.clone(),
        })
    }

    async fn post_json<B: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read assistant error body".to_string());
            return Err(map_http_error(status, text));
        }

        response
            .json()
            .await
            .map_err(|e| StudyError::remote(format!("Malformed assistant response: {}", e)))
    }
}

#[derive(Deserialize)]
struct AskResponse {
    answer: String,
}

#[derive(Deserialize)]
struct SummarizeResponse {
    summary: String,
}

#[async_trait]
impl AssistantService for HttpAssistantService {
    async fn ask(&self, request: &AskRequest) -> Result<String> {
        tracing::debug!(
            "Asking with {} document(s), department {}",
            request.documents.len(),
            request.department
        );
        let response: AskResponse = self.post_json("/ask", request).await?;
        Ok(response.answer)
    }

    async fn summarize(&self, request: &SummarizeRequest) -> Result<String> {
        tracing::debug!(
            "Summarizing {} document(s), department {}",
            request.documents.len(),
            request.department
        );
        let response: SummarizeResponse = self.post_json("/summarize", request).await?;
        Ok(response.summary)
    }
}
