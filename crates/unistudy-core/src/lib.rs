//! UniStudy domain layer.
//!
//! Models, error type, and the traits at the system's seams: the
//! saved-item store, the remote extraction/answer/summary services, the
//! topic content provider, and the rendering view. Implementations live in
//! the infrastructure, interaction, and application crates.

pub mod catalog;
pub mod chat;
pub mod config;
pub mod department;
pub mod document;
pub mod error;
pub mod saved_item;
pub mod services;
pub mod session;
pub mod view;

// Re-export common error type
pub use error::{Result, StudyError};
