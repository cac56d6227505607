//! Contracts for the remote study-assistant services.
//!
//! The extraction, answer, and summary services are external
//! collaborators; these traits pin down only their observable contracts so
//! the coordinators can be tested against mocks and the HTTP clients live
//! in their own crate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::chat::{ChatEntry, EntryKind};
use crate::department::Department;
use crate::error::Result;

/// A raw file selection handed to the extraction service.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

/// One turn of prior conversation, as the answer service expects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub sender: String,
    pub message: String,
    pub timestamp: String,
}

impl From<&ChatEntry> for HistoryTurn {
    fn from(entry: &ChatEntry) -> Self {
        Self {
            sender: match entry.sender {
                crate::chat::Sender::User => "user".to_string(),
                crate::chat::Sender::Ai => "ai".to_string(),
            },
            message: entry.message.clone(),
            timestamp: entry.timestamp.clone(),
        }
    }
}

/// Request payload for the answer service.
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest {
    pub question: String,
    /// Extracted text of every uploaded document, in upload order
    pub documents: Vec<String>,
    pub department: Department,
    #[serde(rename = "chatHistory")]
    pub chat_history: Vec<HistoryTurn>,
}

/// Request payload for the summary service.
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeRequest {
    pub documents: Vec<String>,
    pub department: Department,
}

/// Builds the history payload from a transcript, keeping only genuine
/// conversation turns (questions and answers, not status chatter).
pub fn history_from_transcript(transcript: &[ChatEntry]) -> Vec<HistoryTurn> {
    transcript
        .iter()
        .filter(|entry| matches!(entry.kind, EntryKind::Question | EntryKind::Answer))
        .map(HistoryTurn::from)
        .collect()
}

/// Remote text extraction for uploaded files.
#[async_trait]
pub trait ExtractionService: Send + Sync {
    /// Extracts the text content of one file.
    ///
    /// A `success: false` reply from the service surfaces as
    /// [`StudyError::Remote`](crate::error::StudyError::Remote) carrying
    /// the service's message.
    async fn extract(&self, upload: &FileUpload) -> Result<String>;
}

/// Remote question answering and summarization.
#[async_trait]
pub trait AssistantService: Send + Sync {
    /// Answers a question in the context of the uploaded documents.
    async fn ask(&self, request: &AskRequest) -> Result<String>;

    /// Summarizes all uploaded documents for the given department.
    async fn summarize(&self, request: &SummarizeRequest) -> Result<String>;
}
