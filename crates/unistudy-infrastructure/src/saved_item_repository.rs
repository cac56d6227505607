//! JSON-file implementation of the saved-item store.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use unistudy_core::error::Result;
use unistudy_core::saved_item::{SavedItem, SavedItemRepository};

use crate::storage::atomic_json::AtomicJsonFile;

/// Saved-item repository backed by a single JSON file.
///
/// The whole sequence lives in one file (`saved_items.json`) and is
/// rewritten atomically on every mutation; an in-memory mirror is updated
/// only after the write succeeds, so the two can never disagree about a
/// completed operation. A malformed file is treated as "no data" rather
/// than an error: the user sees an empty list, not a failure.
pub struct JsonSavedItemRepository {
    file: AtomicJsonFile<Vec<SavedItem>>,
    /// In-memory mirror of the persisted sequence
    items: Arc<Mutex<Vec<SavedItem>>>,
}

impl JsonSavedItemRepository {
    /// Opens (or prepares to create) the store at `path`.
    pub fn new(path: PathBuf) -> Self {
        let file = AtomicJsonFile::new(path);
        let items = Self::load_tolerant(&file);
        Self {
            file,
            items: Arc::new(Mutex::new(items)),
        }
    }

    fn load_tolerant(file: &AtomicJsonFile<Vec<SavedItem>>) -> Vec<SavedItem> {
        match file.load() {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(
                    "Saved-item store at {:?} is unreadable, starting empty: {}",
                    file.path(),
                    err
                );
                Vec::new()
            }
        }
    }

    /// Next id: current millis, bumped past the last id when two saves
    /// land in the same millisecond. Ids stay unique and monotonic across
    /// the store's history.
    fn next_id(items: &[SavedItem]) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        match items.last() {
            Some(last) if last.id >= now => last.id + 1,
            _ => now,
        }
    }
}

#[async_trait]
impl SavedItemRepository for JsonSavedItemRepository {
    async fn list_all(&self) -> Result<Vec<SavedItem>> {
        let items = self.items.lock().await;
        Ok(items.clone())
    }

    async fn save(&self, question: &str, answer: &str) -> Result<SavedItem> {
        let mut items = self.items.lock().await;

        let item = SavedItem {
            id: Self::next_id(&items),
            question: question.to_string(),
            answer: answer.to_string(),
            saved_at: chrono::Utc::now().to_rfc3339(),
        };

        // Persist the full updated sequence before the mirror changes
        let mut updated = items.clone();
        updated.push(item.clone());
        self.file.save(&updated)?;

        *items = updated;
        tracing::debug!("Saved item {} ({} total)", item.id, items.len());
        Ok(item)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut items = self.items.lock().await;

        let mut updated = items.clone();
        let before = updated.len();
        updated.retain(|item| item.id != id);
        if updated.len() == before {
            return Ok(false);
        }

        self.file.save(&updated)?;
        *items = updated;
        tracing::debug!("Deleted saved item {}", id);
        Ok(true)
    }
}
