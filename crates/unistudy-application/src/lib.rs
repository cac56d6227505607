//! UniStudy application layer.
//!
//! Coordinators that drive the study-assistant use cases on top of the
//! core domain model: uploading documents, asking questions, summarizing,
//! saving exchanges, and browsing the resource catalog. [`StudyApp`] is
//! the composition root that assembles a working application from
//! configuration.

pub mod app;
pub mod catalog_service;
pub mod conversation;
pub mod upload;

pub use app::StudyApp;
pub use catalog_service::{CatalogService, SimulatedTopicProvider};
pub use conversation::{AnsweredExchange, ConversationCoordinator};
pub use upload::{UploadCoordinator, UploadOutcome};
