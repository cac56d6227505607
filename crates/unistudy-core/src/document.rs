//! Uploaded document domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An uploaded file's extracted text plus metadata.
///
/// Documents live only for the current session: they are owned by
/// [`SessionState`](crate::session::SessionState) and are never persisted.
/// Ids are unique within a session and removal is always by id, never by
/// position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier (UUID format)
    pub id: String,
    /// Original filename
    pub name: String,
    /// MIME type reported at upload time
    pub mime_type: String,
    /// Text content extracted by the remote extraction service
    pub content: String,
}

impl Document {
    /// Creates a new document with a fresh id.
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            mime_type: mime_type.into(),
            content: content.into(),
        }
    }
}
