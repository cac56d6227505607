//! Conversation transcript entries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// What kind of turn an entry represents.
///
/// Only `User`-sent `Question` entries count toward the session's question
/// counter; status and error entries are system chatter and never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A genuine user question
    Question,
    /// An answer or summary produced by the assistant
    Answer,
    /// Progress and confirmation chatter ("Document removed.", ...)
    Status,
    /// A user-visible failure report
    Error,
}

/// One turn in the conversation transcript.
///
/// The transcript is append-only: prior entries are never mutated, with
/// the single exception of a pending entry being replaced through its
/// [`PendingTicket`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatEntry {
    /// Unique entry identifier (UUID format)
    pub id: String,
    pub sender: Sender,
    pub kind: EntryKind,
    pub message: String,
    /// Timestamp when the entry was appended (ISO 8601 format)
    pub timestamp: String,
}

impl ChatEntry {
    pub fn new(sender: Sender, kind: EntryKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender,
            kind,
            message: message.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// A user question entry.
    pub fn question(message: impl Into<String>) -> Self {
        Self::new(Sender::User, EntryKind::Question, message)
    }

    /// An assistant answer entry.
    pub fn answer(message: impl Into<String>) -> Self {
        Self::new(Sender::Ai, EntryKind::Answer, message)
    }

    /// A system status entry, attributed to the assistant side.
    pub fn status(message: impl Into<String>) -> Self {
        Self::new(Sender::Ai, EntryKind::Status, message)
    }

    /// A user-visible failure entry.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Sender::Ai, EntryKind::Error, message)
    }
}

/// Identity handle for a transient "pending" transcript entry.
///
/// Returned by [`SessionState::begin_pending`](crate::session::SessionState::begin_pending)
/// and later redeemed to replace the placeholder with the real outcome.
/// Replacement is by identity, so two pending entries with identical text
/// can never be confused for one another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PendingTicket(pub(crate) String);

impl PendingTicket {
    pub(crate) fn new(entry_id: &str) -> Self {
        Self(entry_id.to_string())
    }

    /// The id of the placeholder entry this ticket refers to.
    pub fn entry_id(&self) -> &str {
        &self.0
    }
}
