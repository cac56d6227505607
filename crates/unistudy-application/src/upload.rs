//! Upload coordinator: turns raw file selections into session documents.

use std::sync::Arc;

use tokio::sync::RwLock;

use unistudy_core::document::Document;
use unistudy_core::chat::ChatEntry;
use unistudy_core::error::StudyError;
use unistudy_core::services::{ExtractionService, FileUpload};
use unistudy_core::session::SessionState;
use unistudy_core::view::StudyView;

/// Per-file result of a batch upload.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// The file was extracted and added as a document with this id.
    Added { file_name: String, document_id: String },
    /// Extraction or transport failed; the transcript explains.
    Failed { file_name: String },
}

/// Coordinates uploads: delegates extraction to the remote service, adds
/// successful results to session state, and reports failures through the
/// transcript.
///
/// Files in a batch are independent; one failure never aborts the rest.
pub struct UploadCoordinator {
    state: Arc<RwLock<SessionState>>,
    extractor: Arc<dyn ExtractionService>,
    view: Arc<dyn StudyView>,
}

impl UploadCoordinator {
    pub fn new(
        state: Arc<RwLock<SessionState>>,
        extractor: Arc<dyn ExtractionService>,
        view: Arc<dyn StudyView>,
    ) -> Self {
        Self {
            state,
            extractor,
            view,
        }
    }

    /// Processes a batch of selected files, one at a time.
    pub async fn process_files(&self, batch: Vec<FileUpload>) -> Vec<UploadOutcome> {
        let mut outcomes = Vec::with_capacity(batch.len());

        for upload in batch {
            let outcome = match self.extractor.extract(&upload).await {
                Ok(text) => {
                    let doc = Document::new(&upload.name, &upload.mime_type, text);
                    let document_id = doc.id.clone();

                    let mut state = self.state.write().await;
                    state.add_document(doc);
                    state.append_chat(ChatEntry::status(format!(
                        "Successfully processed \"{}\".",
                        upload.name
                    )));
                    drop(state);

                    tracing::info!("Added document for {}", upload.name);
                    UploadOutcome::Added {
                        file_name: upload.name,
                        document_id,
                    }
                }
                Err(err) => {
                    let message = upload_failure_message(&upload.name, &err);
                    tracing::warn!("Upload of {} failed: {}", upload.name, err);

                    let mut state = self.state.write().await;
                    state.append_chat(ChatEntry::error(message));
                    drop(state);

                    UploadOutcome::Failed {
                        file_name: upload.name,
                    }
                }
            };
            outcomes.push(outcome);
            self.render().await;
        }

        outcomes
    }

    /// Removes a document by id, announcing the removal when one existed.
    pub async fn remove_document(&self, id: &str) -> bool {
        let mut state = self.state.write().await;
        let removed = state.remove_document(id);
        if removed {
            state.append_chat(ChatEntry::status("Document removed."));
        }
        drop(state);
        self.render().await;
        removed
    }

    /// Clears all documents from the session.
    pub async fn clear_documents(&self) {
        let mut state = self.state.write().await;
        state.clear_documents();
        state.append_chat(ChatEntry::status(
            "All uploaded files have been cleared.",
        ));
        drop(state);
        self.render().await;
    }

    async fn render(&self) {
        let state = self.state.read().await;
        self.view.render_documents(state.documents());
        self.view.render_transcript(state.transcript());
    }
}

/// Transport failures get different wording from service rejections so the
/// user knows whether to check the file or the connection.
fn upload_failure_message(file_name: &str, err: &StudyError) -> String {
    if err.is_transport() {
        format!(
            "Failed to upload \"{}\". Please check server connection.",
            file_name
        )
    } else {
        format!("Error processing \"{}\": {}", file_name, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use unistudy_core::chat::EntryKind;
    use unistudy_core::error::Result;
    use unistudy_core::view::NullView;

    /// Fails any file whose name starts with "bad", succeeds otherwise.
    struct MockExtractor {
        calls: AtomicUsize,
    }

    impl MockExtractor {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ExtractionService for MockExtractor {
        async fn extract(&self, upload: &FileUpload) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if upload.name.starts_with("bad") {
                Err(StudyError::remote("Could not extract text from PDF."))
            } else {
                Ok(format!("text of {}", upload.name))
            }
        }
    }

    fn pdf(name: &str) -> FileUpload {
        FileUpload::new(name, "application/pdf", vec![1, 2, 3])
    }

    fn coordinator() -> (UploadCoordinator, Arc<RwLock<SessionState>>, Arc<MockExtractor>) {
        let state = Arc::new(RwLock::new(SessionState::new()));
        let extractor = Arc::new(MockExtractor::new());
        let coordinator = UploadCoordinator::new(
            state.clone(),
            extractor.clone(),
            Arc::new(NullView),
        );
        (coordinator, state, extractor)
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_the_batch() {
        let (coordinator, state, extractor) = coordinator();

        let outcomes = coordinator
            .process_files(vec![pdf("a.pdf"), pdf("bad.pdf"), pdf("c.pdf")])
            .await;

        // Every file was attempted
        assert_eq!(extractor.calls.load(Ordering::SeqCst), 3);
        assert_eq!(outcomes.len(), 3);
        assert!(matches!(outcomes[1], UploadOutcome::Failed { .. }));

        let state = state.read().await;
        assert_eq!(state.document_count(), 2);

        let failures: Vec<_> = state
            .transcript()
            .iter()
            .filter(|e| e.kind == EntryKind::Error)
            .collect();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].message.contains("bad.pdf"));
    }

    #[tokio::test]
    async fn test_success_adds_document_with_extracted_text() {
        let (coordinator, state, _) = coordinator();

        let outcomes = coordinator.process_files(vec![pdf("notes.pdf")]).await;

        assert!(matches!(outcomes[0], UploadOutcome::Added { .. }));
        let state = state.read().await;
        assert_eq!(state.documents()[0].content, "text of notes.pdf");
        assert_eq!(state.documents()[0].mime_type, "application/pdf");
    }

    #[tokio::test]
    async fn test_remove_document_announces_only_real_removals() {
        let (coordinator, state, _) = coordinator();
        coordinator.process_files(vec![pdf("notes.pdf")]).await;

        let id = state.read().await.documents()[0].id.clone();
        assert!(coordinator.remove_document(&id).await);
        assert!(!coordinator.remove_document(&id).await);

        let state = state.read().await;
        assert_eq!(state.document_count(), 0);
        let removals = state
            .transcript()
            .iter()
            .filter(|e| e.message == "Document removed.")
            .count();
        assert_eq!(removals, 1);
    }

    #[tokio::test]
    async fn test_transport_failure_gets_connection_wording() {
        let message =
            upload_failure_message("a.pdf", &StudyError::transport("connection refused"));
        assert!(message.contains("server connection"));

        let message = upload_failure_message("a.pdf", &StudyError::remote("scanned or empty"));
        assert!(message.contains("Error processing"));
    }
}
