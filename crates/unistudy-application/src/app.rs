//! Composition root wiring configuration, storage, HTTP clients, and
//! coordinators into one application handle.

use std::sync::Arc;

use tokio::sync::RwLock;

use unistudy_core::config::StudyConfig;
use unistudy_core::error::Result;
use unistudy_core::saved_item::SavedItemRepository;
use unistudy_core::services::{AssistantService, ExtractionService};
use unistudy_core::session::SessionState;
use unistudy_core::view::StudyView;
use unistudy_infrastructure::config_service::ConfigService;
use unistudy_infrastructure::paths::StudyPaths;
use unistudy_infrastructure::saved_item_repository::JsonSavedItemRepository;
use unistudy_interaction::{HttpAssistantService, HttpExtractionService};

use crate::catalog_service::{CatalogService, SimulatedTopicProvider};
use crate::conversation::ConversationCoordinator;
use crate::upload::UploadCoordinator;

/// The assembled application: one session, its coordinators, and the
/// catalog. Construct once and share; the coordinators are internally
/// synchronized.
pub struct StudyApp {
    config: StudyConfig,
    state: Arc<RwLock<SessionState>>,
    pub uploads: UploadCoordinator,
    pub conversation: ConversationCoordinator,
    pub catalog: CatalogService,
}

impl StudyApp {
    /// Bootstraps from the default platform locations: loads (or creates)
    /// `config.toml`, opens the saved-item store, and builds HTTP clients
    /// from the configured base URLs.
    pub fn bootstrap(view: Arc<dyn StudyView>) -> Result<Self> {
        let config = ConfigService::default_location()?.load()?;

        let saved_items_path = StudyPaths::saved_items_file().map_err(|e| {
            unistudy_core::StudyError::config(format!("Failed to resolve data path: {}", e))
        })?;
        let saved_items = Arc::new(JsonSavedItemRepository::new(saved_items_path));

        let extractor = Arc::new(HttpExtractionService::from_config(&config)?);
        let assistant = Arc::new(HttpAssistantService::from_config(&config)?);

        Ok(Self::assemble(config, extractor, assistant, saved_items, view))
    }

    /// Wires an application from explicit parts. Used by tests and by any
    /// front end that supplies its own service implementations.
    pub fn assemble(
        config: StudyConfig,
        extractor: Arc<dyn ExtractionService>,
        assistant: Arc<dyn AssistantService>,
        saved_items: Arc<dyn SavedItemRepository>,
        view: Arc<dyn StudyView>,
    ) -> Self {
        let state = Arc::new(RwLock::new(SessionState::new()));

        let uploads = UploadCoordinator::new(state.clone(), extractor, view.clone());
        let conversation =
            ConversationCoordinator::new(state.clone(), assistant, saved_items, view);
        let catalog = CatalogService::new(Arc::new(SimulatedTopicProvider));

        Self {
            config,
            state,
            uploads,
            conversation,
            catalog,
        }
    }

    pub fn config(&self) -> &StudyConfig {
        &self.config
    }

    /// Shared session state, for front ends that need read access beyond
    /// what the view receives.
    pub fn state(&self) -> Arc<RwLock<SessionState>> {
        self.state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tempfile::TempDir;
    use unistudy_core::services::{AskRequest, FileUpload, SummarizeRequest};
    use unistudy_core::view::NullView;

    struct EchoAssistant;

    #[async_trait]
    impl AssistantService for EchoAssistant {
        async fn ask(&self, request: &AskRequest) -> Result<String> {
            Ok(format!("answer to: {}", request.question))
        }

        async fn summarize(&self, _request: &SummarizeRequest) -> Result<String> {
            Ok("the summary".to_string())
        }
    }

    struct FixedExtractor;

    #[async_trait]
    impl ExtractionService for FixedExtractor {
        async fn extract(&self, upload: &FileUpload) -> Result<String> {
            Ok(format!("extracted {}", upload.name))
        }
    }

    fn app(dir: &TempDir) -> StudyApp {
        StudyApp::assemble(
            StudyConfig::default(),
            Arc::new(FixedExtractor),
            Arc::new(EchoAssistant),
            Arc::new(JsonSavedItemRepository::new(dir.path().join("saved.json"))),
            Arc::new(NullView),
        )
    }

    #[tokio::test]
    async fn test_upload_then_ask_then_save_flow() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir);

        app.uploads
            .process_files(vec![FileUpload::new(
                "notes.pdf",
                "application/pdf",
                vec![1],
            )])
            .await;

        let exchange = app.conversation.ask("What is entropy?").await.unwrap();
        assert_eq!(exchange.answer, "answer to: What is entropy?");

        app.conversation.save_exchange(&exchange).await.unwrap();
        let saved = app.conversation.saved_items().await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].question, "What is entropy?");
    }

    #[tokio::test]
    async fn test_view_receives_projections_after_mutations() {
        use std::sync::Mutex;
        use unistudy_core::chat::ChatEntry;
        use unistudy_core::department::Department;
        use unistudy_core::document::Document;
        use unistudy_core::saved_item::SavedItem;
        use unistudy_core::view::StudyView;

        #[derive(Default)]
        struct RecordingView {
            last_transcript_len: Mutex<usize>,
            last_document_count: Mutex<usize>,
            last_saved_count: Mutex<usize>,
            last_department: Mutex<Option<Department>>,
        }

        impl StudyView for RecordingView {
            fn render_transcript(&self, transcript: &[ChatEntry]) {
                *self.last_transcript_len.lock().unwrap() = transcript.len();
            }
            fn render_documents(&self, documents: &[Document]) {
                *self.last_document_count.lock().unwrap() = documents.len();
            }
            fn render_saved_items(&self, items: &[SavedItem]) {
                *self.last_saved_count.lock().unwrap() = items.len();
            }
            fn render_department(&self, department: Department) {
                *self.last_department.lock().unwrap() = Some(department);
            }
        }

        let dir = TempDir::new().unwrap();
        let view = Arc::new(RecordingView::default());
        let app = StudyApp::assemble(
            StudyConfig::default(),
            Arc::new(FixedExtractor),
            Arc::new(EchoAssistant),
            Arc::new(JsonSavedItemRepository::new(dir.path().join("saved.json"))),
            view.clone(),
        );

        app.uploads
            .process_files(vec![FileUpload::new("a.pdf", "application/pdf", vec![1])])
            .await;
        assert_eq!(*view.last_document_count.lock().unwrap(), 1);

        app.conversation.select_department(Department::Medicine).await;
        assert_eq!(
            *view.last_department.lock().unwrap(),
            Some(Department::Medicine)
        );

        let exchange = app.conversation.ask("q").await.unwrap();
        // Upload status + department status + question + answer
        assert_eq!(*view.last_transcript_len.lock().unwrap(), 4);

        app.conversation.save_exchange(&exchange).await.unwrap();
        assert_eq!(*view.last_saved_count.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_saved_items_survive_reassembly() {
        let dir = TempDir::new().unwrap();

        let app1 = app(&dir);
        let exchange = app1.conversation.ask("q").await.unwrap();
        app1.conversation.save_exchange(&exchange).await.unwrap();

        let app2 = app(&dir);
        assert_eq!(app2.conversation.saved_items().await.unwrap().len(), 1);
    }
}
