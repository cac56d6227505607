//! UniStudy interaction layer.
//!
//! HTTP clients for the remote study-assistant backend: text extraction,
//! question answering, and summarization. The backend contracts are
//! defined by the traits in [`unistudy_core::services`]; this crate only
//! supplies the `reqwest` implementations.

pub mod assistant_client;
pub mod extraction_client;
pub mod http;

pub use assistant_client::HttpAssistantService;
pub use extraction_client::HttpExtractionService;
