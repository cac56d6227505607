//! Per-session state: documents, transcript, department, counters.
//!
//! `SessionState` is created at session start and discarded at session
//! end. It owns everything that is *not* durably persisted; the saved-item
//! store has an independent lifetime (see [`crate::saved_item`]).

use crate::chat::{ChatEntry, EntryKind, PendingTicket, Sender};
use crate::department::Department;
use crate::document::Document;

/// In-memory, per-session state.
///
/// All mutation goes through methods so the invariants hold:
/// - the transcript is append-only (pending replacement excepted),
/// - the question counter only counts genuine user questions,
/// - document removal is by id.
///
/// Rendering is not this type's concern: callers project the state through
/// a [`StudyView`](crate::view::StudyView) after each mutation.
#[derive(Debug, Default)]
pub struct SessionState {
    documents: Vec<Document>,
    transcript: Vec<ChatEntry>,
    department: Department,
    question_count: u32,
    /// Ids of transcript entries still awaiting resolution
    pending: Vec<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    // --- documents ---

    pub fn add_document(&mut self, doc: Document) {
        self.documents.push(doc);
    }

    /// Removes the document with the given id. Returns whether one was
    /// actually removed.
    pub fn remove_document(&mut self, id: &str) -> bool {
        let before = self.documents.len();
        self.documents.retain(|doc| doc.id != id);
        self.documents.len() != before
    }

    pub fn clear_documents(&mut self) {
        self.documents.clear();
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Extracted text of every document, in upload order. This is the
    /// payload the answer and summary services receive.
    pub fn document_contents(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.content.clone()).collect()
    }

    // --- transcript ---

    /// Appends an entry to the transcript.
    ///
    /// The question counter increments only for `User`-sent `Question`
    /// entries; status and error messages never count.
    pub fn append_chat(&mut self, entry: ChatEntry) {
        if entry.sender == Sender::User && entry.kind == EntryKind::Question {
            self.question_count += 1;
        }
        self.transcript.push(entry);
    }

    /// Appends a transient placeholder entry ("Thinking...") and returns a
    /// ticket that identifies it.
    ///
    /// The ticket is the only way to remove the placeholder; it is matched
    /// by entry identity, never by message text.
    pub fn begin_pending(&mut self, message: impl Into<String>) -> PendingTicket {
        let entry = ChatEntry::status(message);
        let ticket = PendingTicket::new(&entry.id);
        self.pending.push(entry.id.clone());
        self.transcript.push(entry);
        ticket
    }

    /// Replaces the placeholder identified by `ticket` with `entry`.
    ///
    /// Returns `false` (and appends nothing) if the ticket was already
    /// redeemed.
    pub fn resolve_pending(&mut self, ticket: PendingTicket, entry: ChatEntry) -> bool {
        let Some(index) = self.take_pending(&ticket) else {
            return false;
        };
        if entry.sender == Sender::User && entry.kind == EntryKind::Question {
            self.question_count += 1;
        }
        self.transcript[index] = entry;
        true
    }

    /// Replaces the placeholder identified by `ticket` with an error entry.
    pub fn fail_pending(&mut self, ticket: PendingTicket, message: impl Into<String>) -> bool {
        self.resolve_pending(ticket, ChatEntry::error(message))
    }

    fn take_pending(&mut self, ticket: &PendingTicket) -> Option<usize> {
        let pos = self.pending.iter().position(|id| id == ticket.entry_id())?;
        self.pending.remove(pos);
        self.transcript
            .iter()
            .position(|entry| entry.id == *ticket.entry_id())
    }

    pub fn transcript(&self) -> &[ChatEntry] {
        &self.transcript
    }

    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    // --- department ---

    /// Selects a department. Idempotent: reselecting the current
    /// department changes nothing and returns `false`.
    pub fn select_department(&mut self, department: Department) -> bool {
        if self.department == department {
            return false;
        }
        self.department = department;
        true
    }

    pub fn department(&self) -> Department {
        self.department
    }

    // --- lifecycle ---

    /// Clears the transcript and question counter back to their initial
    /// state. Documents and the department selection are untouched.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.pending.clear();
        self.question_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_document_by_id() {
        let mut state = SessionState::new();
        let doc = Document::new("a.pdf", "application/pdf", "alpha");
        let id = doc.id.clone();
        state.add_document(doc);
        state.add_document(Document::new("b.pdf", "application/pdf", "beta"));

        assert!(state.remove_document(&id));
        assert_eq!(state.document_count(), 1);
        assert_eq!(state.documents()[0].name, "b.pdf");

        // Removing again is a no-op
        assert!(!state.remove_document(&id));
    }

    #[test]
    fn test_question_counter_only_counts_user_questions() {
        let mut state = SessionState::new();
        state.append_chat(ChatEntry::question("What is entropy?"));
        state.append_chat(ChatEntry::status("Document removed."));
        state.append_chat(ChatEntry::answer("Entropy is..."));
        state.append_chat(ChatEntry::error("Upload failed."));

        assert_eq!(state.question_count(), 1);
    }

    #[test]
    fn test_pending_resolved_by_identity_not_text() {
        let mut state = SessionState::new();
        // Two placeholders with identical text
        let first = state.begin_pending("Thinking...");
        let second = state.begin_pending("Thinking...");

        assert!(state.resolve_pending(second, ChatEntry::answer("second answer")));

        // The first placeholder is still pending and still in place
        assert_eq!(state.transcript()[0].message, "Thinking...");
        assert_eq!(state.transcript()[1].message, "second answer");

        assert!(state.fail_pending(first, "timed out"));
        assert_eq!(state.transcript()[0].kind, EntryKind::Error);
    }

    #[test]
    fn test_pending_ticket_is_single_use() {
        let mut state = SessionState::new();
        let ticket = state.begin_pending("Generating summary...");

        assert!(state.resolve_pending(ticket.clone(), ChatEntry::answer("summary")));
        assert!(!state.resolve_pending(ticket, ChatEntry::answer("again")));
        assert_eq!(state.transcript().len(), 1);
    }

    #[test]
    fn test_select_department_is_idempotent() {
        let mut state = SessionState::new();
        assert!(state.select_department(Department::Law));
        assert!(!state.select_department(Department::Law));
        assert_eq!(state.department(), Department::Law);
    }

    #[test]
    fn test_reset_keeps_documents_and_department() {
        let mut state = SessionState::new();
        state.add_document(Document::new("a.pdf", "application/pdf", "alpha"));
        state.select_department(Department::Medicine);
        state.append_chat(ChatEntry::question("q"));
        let _ = state.begin_pending("Thinking...");

        state.reset();

        assert!(state.transcript().is_empty());
        assert_eq!(state.question_count(), 0);
        assert_eq!(state.document_count(), 1);
        assert_eq!(state.department(), Department::Medicine);
    }
}
