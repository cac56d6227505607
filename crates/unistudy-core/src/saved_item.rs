//! Durably saved question/answer pairs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A question/answer pair the user explicitly chose to keep.
///
/// Unlike [`Document`](crate::document::Document) and the transcript,
/// saved items have a lifetime independent of the session: they survive
/// restart and are removed only by an explicit delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedItem {
    /// Unique across the store's entire history. Ids are monotonic
    /// creation timestamps in milliseconds (bumped on collision), so later
    /// saves always compare greater.
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Timestamp when the item was saved (ISO 8601 format)
    pub saved_at: String,
}

/// An abstract repository for the saved-item store.
///
/// Implementations must persist the *entire* sequence on every mutation
/// before reporting success, so an interrupted write leaves either the old
/// or the new complete list, never a partial one. Malformed or missing
/// storage reads as an empty sequence rather than an error.
///
/// The store assumes a single writer; concurrent processes race
/// last-write-wins, which is an acknowledged limitation.
#[async_trait]
pub trait SavedItemRepository: Send + Sync {
    /// Returns the full saved sequence, oldest first.
    ///
    /// Absent or unreadable storage yields an empty vector, not an error.
    async fn list_all(&self) -> Result<Vec<SavedItem>>;

    /// Appends a new item with a fresh monotonic id, persists the full
    /// sequence, and returns the created record.
    async fn save(&self, question: &str, answer: &str) -> Result<SavedItem>;

    /// Removes the item with the given id and persists the result.
    ///
    /// Returns whether an item was actually removed; deleting an unknown
    /// id is a no-op that returns `false`.
    async fn delete(&self, id: i64) -> Result<bool>;
}
