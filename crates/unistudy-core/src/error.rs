//! Error types for the UniStudy application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire UniStudy application.
///
/// Variants mirror the failure taxonomy the coordinators report to the
/// user: local validation, remote-service failure, transport failure, and
/// storage problems. Every variant carries a human-readable message.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum StudyError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Input rejected before any network or storage access
    #[error("Validation error: {0}")]
    Validation(String),

    /// The remote service answered, but with a non-success result
    #[error("Remote service error: {message}")]
    Remote {
        status: Option<u16>,
        message: String,
    },

    /// The remote service could not be reached at all
    #[error("Transport error: {0}")]
    Transport(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Data access error (repository/storage layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StudyError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Remote error without an HTTP status
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            status: None,
            message: message.into(),
        }
    }

    /// Creates a Remote error carrying the HTTP status code
    pub fn remote_with_status(status: u16, message: impl Into<String>) -> Self {
        Self::Remote {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is a Remote error
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// The message a transcript entry should carry for this failure.
    ///
    /// Transport and remote failures get distinct wording so the user can
    /// tell "backend unreachable" apart from "backend refused".
    pub fn transcript_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Transport(_) => {
                "Could not reach the assistant service. Please check your connection and try again."
                    .to_string()
            }
            Self::Remote { message, .. } => {
                format!("The assistant service reported an error: {}", message)
            }
            other => format!("Something went wrong: {}", other),
        }
    }
}

impl From<std::io::Error> for StudyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for StudyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for StudyError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for StudyError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for StudyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::Transport(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Remote {
                status: Some(status.as_u16()),
                message: err.to_string(),
            }
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Conversion from anyhow::Error (transitional, edges only)
impl From<anyhow::Error> for StudyError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, StudyError>`.
pub type Result<T> = std::result::Result<T, StudyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_message_distinguishes_transport_from_remote() {
        let transport = StudyError::transport("connection refused");
        let remote = StudyError::remote_with_status(500, "model overloaded");

        let transport_msg = transport.transcript_message();
        let remote_msg = remote.transcript_message();

        assert_ne!(transport_msg, remote_msg);
        assert!(transport_msg.contains("connection"));
        assert!(remote_msg.contains("model overloaded"));
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = StudyError::validation("Please enter a question.");
        assert_eq!(err.transcript_message(), "Please enter a question.");
        assert!(err.is_validation());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: StudyError = io.into();
        assert!(matches!(err, StudyError::Io { .. }));
    }
}
