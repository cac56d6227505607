//! UniStudy infrastructure layer.
//!
//! File-backed implementations of the core repository traits, plus paths,
//! configuration loading, and logging setup.

pub mod config_service;
pub mod paths;
pub mod saved_item_repository;
pub mod storage;
pub mod telemetry;

pub use config_service::ConfigService;
pub use saved_item_repository::JsonSavedItemRepository;
pub use storage::AtomicJsonFile;
