//! Error types and exit codes for medrec
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid configuration values)
//! - 3: Data error (unknown item, missing or inconsistent artifacts)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown item, bad artifacts (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during medrec operations
#[derive(Error, Debug)]
pub enum MedrecError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("artifact not found: {path:?}")]
    ArtifactMissing { path: PathBuf },

    #[error("invalid artifact {path:?}: {reason}")]
    InvalidArtifact { path: PathBuf, reason: String },

    #[error("catalog is empty: {path:?}")]
    EmptyCatalog { path: PathBuf },

    #[error("duplicate item name in catalog: {name}")]
    DuplicateItem { name: String },

    #[error("catalog has {catalog} items but similarity matrix has {rows} rows")]
    DimensionMismatch { catalog: usize, rows: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl MedrecError {
    /// Create an error for an unknown catalog item
    pub fn item_not_found(name: impl std::fmt::Display) -> Self {
        Self::not_found("item", name)
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        MedrecError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        MedrecError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        MedrecError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed artifact file
    pub fn invalid_artifact(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        MedrecError::InvalidArtifact {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        MedrecError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Whether this error belongs to the startup load family.
    ///
    /// These are fatal: no recommendation may be served afterwards.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            MedrecError::ArtifactMissing { .. }
                | MedrecError::InvalidArtifact { .. }
                | MedrecError::EmptyCatalog { .. }
                | MedrecError::DuplicateItem { .. }
                | MedrecError::DimensionMismatch { .. }
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            MedrecError::UnknownFormat(_)
            | MedrecError::UsageError(_)
            | MedrecError::InvalidValue { .. } => ExitCode::Usage,

            // Data errors
            MedrecError::NotFound { .. }
            | MedrecError::AlreadyExists { .. }
            | MedrecError::ArtifactMissing { .. }
            | MedrecError::InvalidArtifact { .. }
            | MedrecError::EmptyCatalog { .. }
            | MedrecError::DuplicateItem { .. }
            | MedrecError::DimensionMismatch { .. } => ExitCode::Data,

            // Generic failures
            MedrecError::Io(_)
            | MedrecError::Json(_)
            | MedrecError::Toml(_)
            | MedrecError::FailedOperationWithTarget { .. }
            | MedrecError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            MedrecError::UnknownFormat(_) => "unknown_format",
            MedrecError::UsageError(_) => "usage_error",
            MedrecError::InvalidValue { .. } => "invalid_value",
            MedrecError::NotFound { .. } => "not_found",
            MedrecError::AlreadyExists { .. } => "already_exists",
            MedrecError::ArtifactMissing { .. } => "artifact_missing",
            MedrecError::InvalidArtifact { .. } => "invalid_artifact",
            MedrecError::EmptyCatalog { .. } => "empty_catalog",
            MedrecError::DuplicateItem { .. } => "duplicate_item",
            MedrecError::DimensionMismatch { .. } => "dimension_mismatch",
            MedrecError::Io(_) => "io_error",
            MedrecError::Json(_) => "json_error",
            MedrecError::Toml(_) => "toml_error",
            MedrecError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            MedrecError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for medrec operations
pub type Result<T> = std::result::Result<T, MedrecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_not_found_is_data_error() {
        let err = MedrecError::item_not_found("Nope 10mg");
        assert_eq!(err.exit_code(), ExitCode::Data);
        assert_eq!(err.to_string(), "item not found: Nope 10mg");
        assert!(!err.is_load_error());
    }

    #[test]
    fn test_load_errors_are_classified() {
        let mismatch = MedrecError::DimensionMismatch {
            catalog: 3,
            rows: 4,
        };
        assert!(mismatch.is_load_error());
        assert_eq!(mismatch.exit_code(), ExitCode::Data);

        let missing = MedrecError::ArtifactMissing {
            path: PathBuf::from("similarity.json"),
        };
        assert!(missing.is_load_error());
    }

    #[test]
    fn test_to_json_envelope() {
        let err = MedrecError::invalid_value("limit", 0);
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "invalid_value");
        assert_eq!(json["error"]["message"], "invalid limit: 0");
    }
}
