//! Rendering seam.
//!
//! State transitions and presentation are kept independent: coordinators
//! mutate [`SessionState`](crate::session::SessionState) or the saved-item
//! store, then project the new state through a `StudyView`. A view is a
//! pure consumer of snapshots; it never feeds anything back.

use crate::chat::ChatEntry;
use crate::department::Department;
use crate::document::Document;
use crate::saved_item::SavedItem;

/// Receives state projections after every mutation.
pub trait StudyView: Send + Sync {
    fn render_transcript(&self, transcript: &[ChatEntry]);
    fn render_documents(&self, documents: &[Document]);
    fn render_saved_items(&self, items: &[SavedItem]);
    fn render_department(&self, department: Department);
}

/// A view that renders nothing, for headless and test use.
#[derive(Debug, Default)]
pub struct NullView;

impl StudyView for NullView {
    fn render_transcript(&self, _transcript: &[ChatEntry]) {}
    fn render_documents(&self, _documents: &[Document]) {}
    fn render_saved_items(&self, _items: &[SavedItem]) {}
    fn render_department(&self, _department: Department) {}
}
