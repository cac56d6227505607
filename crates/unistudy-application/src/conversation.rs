//! Conversation coordinator: questions, summaries, and saved exchanges.

use std::sync::Arc;

use tokio::sync::RwLock;

use unistudy_core::chat::ChatEntry;
use unistudy_core::department::Department;
use unistudy_core::error::Result;
use unistudy_core::saved_item::{SavedItem, SavedItemRepository};
use unistudy_core::services::{
    AskRequest, AssistantService, SummarizeRequest, history_from_transcript,
};
use unistudy_core::session::SessionState;
use unistudy_core::view::StudyView;

/// A successfully answered question, offered back to the caller so the
/// user can choose to persist it via [`ConversationCoordinator::save_exchange`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnsweredExchange {
    pub question: String,
    pub answer: String,
}

/// Coordinates the conversation with the remote assistant and the
/// saved-item store.
///
/// Every failure path ends in a transcript entry and a state the user can
/// act on again; nothing here is fatal and nothing retries automatically.
pub struct ConversationCoordinator {
    state: Arc<RwLock<SessionState>>,
    assistant: Arc<dyn AssistantService>,
    saved_items: Arc<dyn SavedItemRepository>,
    view: Arc<dyn StudyView>,
}

impl ConversationCoordinator {
    pub fn new(
        state: Arc<RwLock<SessionState>>,
        assistant: Arc<dyn AssistantService>,
        saved_items: Arc<dyn SavedItemRepository>,
        view: Arc<dyn StudyView>,
    ) -> Self {
        Self {
            state,
            assistant,
            saved_items,
            view,
        }
    }

    /// Asks the assistant a question in the context of the uploaded
    /// documents and prior conversation.
    ///
    /// Empty or whitespace-only input is rejected locally with a single
    /// transcript entry and no network call. On success the answer lands
    /// in the transcript and an [`AnsweredExchange`] is returned; on
    /// failure the pending placeholder becomes an error entry and `None`
    /// is returned.
    ///
    /// Calls are not serialized: if a second `ask` is issued while one is
    /// in flight, both resolve and append in *arrival* order, which may
    /// differ from issue order. Callers wanting strict ordering should
    /// await each call before issuing the next.
    pub async fn ask(&self, question: &str) -> Option<AnsweredExchange> {
        let question = question.trim();
        if question.is_empty() {
            self.append_and_render(ChatEntry::status("Please enter a question."))
                .await;
            return None;
        }

        let (ticket, request) = {
            let mut state = self.state.write().await;
            state.append_chat(ChatEntry::question(question));
            let ticket = state.begin_pending("Thinking...");
            let request = AskRequest {
                question: question.to_string(),
                documents: state.document_contents(),
                department: state.department(),
                chat_history: history_from_transcript(state.transcript()),
            };
            (ticket, request)
        };
        self.render_transcript().await;

        match self.assistant.ask(&request).await {
            Ok(answer) => {
                let mut state = self.state.write().await;
                state.resolve_pending(ticket, ChatEntry::answer(&answer));
                drop(state);
                self.render_transcript().await;

                Some(AnsweredExchange {
                    question: question.to_string(),
                    answer,
                })
            }
            Err(err) => {
                tracing::warn!("Ask failed: {}", err);
                let mut state = self.state.write().await;
                state.fail_pending(ticket, err.transcript_message());
                drop(state);
                self.render_transcript().await;
                None
            }
        }
    }

    /// Summarizes all uploaded documents for the selected department.
    ///
    /// Requires at least one document; otherwise the precondition is
    /// reported through the transcript and no network call is made.
    pub async fn summarize(&self) -> Option<String> {
        let (ticket, request) = {
            let mut state = self.state.write().await;
            if state.document_count() == 0 {
                state.append_chat(ChatEntry::status(
                    "Please upload documents before asking for a summary.",
                ));
                drop(state);
                self.render_transcript().await;
                return None;
            }

            let ticket = state.begin_pending("Generating summary...");
            let request = SummarizeRequest {
                documents: state.document_contents(),
                department: state.department(),
            };
            (ticket, request)
        };
        self.render_transcript().await;

        match self.assistant.summarize(&request).await {
            Ok(summary) => {
                let mut state = self.state.write().await;
                state.resolve_pending(ticket, ChatEntry::answer(&summary));
                drop(state);
                self.render_transcript().await;
                Some(summary)
            }
            Err(err) => {
                tracing::warn!("Summarize failed: {}", err);
                let mut state = self.state.write().await;
                state.fail_pending(ticket, err.transcript_message());
                drop(state);
                self.render_transcript().await;
                None
            }
        }
    }

    /// Persists a question/answer pair the user chose to keep.
    pub async fn save_exchange(&self, exchange: &AnsweredExchange) -> Result<SavedItem> {
        let item = self
            .saved_items
            .save(&exchange.question, &exchange.answer)
            .await?;

        self.render_saved_items().await?;
        self.append_and_render(ChatEntry::status(
            "Your chat has been saved! You can find it in the 'Saved Questions & Notes' section.",
        ))
        .await;

        Ok(item)
    }

    /// Deletes a saved item by id. Unknown ids are a quiet no-op.
    pub async fn delete_saved(&self, id: i64) -> Result<bool> {
        let removed = self.saved_items.delete(id).await?;
        self.render_saved_items().await?;
        if removed {
            self.append_and_render(ChatEntry::status("Saved item deleted."))
                .await;
        }
        Ok(removed)
    }

    /// The full saved sequence, oldest first.
    pub async fn saved_items(&self) -> Result<Vec<SavedItem>> {
        self.saved_items.list_all().await
    }

    /// Selects the department. Reselecting the current one is a no-op
    /// beyond a re-render.
    pub async fn select_department(&self, department: Department) {
        let changed = {
            let mut state = self.state.write().await;
            let changed = state.select_department(department);
            if changed {
                state.append_chat(ChatEntry::status(format!(
                    "You have selected the {} department.",
                    department.label()
                )));
            }
            changed
        };

        self.view.render_department(department);
        if changed {
            self.render_transcript().await;
        }
    }

    /// Clears the transcript and question counter. Documents and the
    /// department selection survive.
    pub async fn clear_chat(&self) {
        let mut state = self.state.write().await;
        state.reset();
        state.append_chat(ChatEntry::status("Chat history cleared."));
        drop(state);
        self.render_transcript().await;
    }

    async fn append_and_render(&self, entry: ChatEntry) {
        let mut state = self.state.write().await;
        state.append_chat(entry);
        drop(state);
        self.render_transcript().await;
    }

    async fn render_transcript(&self) {
        let state = self.state.read().await;
        self.view.render_transcript(state.transcript());
    }

    async fn render_saved_items(&self) -> Result<()> {
        let items = self.saved_items.list_all().await?;
        self.view.render_saved_items(&items);
        Ok(())
    }
}
