//! Error types and exit codes for dotwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown label, cyclic input, bad DOT file)

use thiserror::Error;

/// Exit codes for the dotwalk CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad graph input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during dotwalk operations
#[derive(Error, Debug)]
pub enum WalkError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("unknown vertex label: {label}")]
    UnknownLabel { label: String },

    #[error("duplicate vertex label: {label}")]
    DuplicateLabel { label: String },

    #[error("graph contains a cycle (back edge {from} -> {to})")]
    CyclicGraph { from: String, to: String },

    #[error("negative edge weight {weight} on {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: i64,
    },

    #[error("invalid DOT input: {reason}")]
    InvalidDot { reason: String },

    // Generic failures (exit code 1)
    #[error("extract from an empty queue")]
    EmptyQueue,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WalkError {
    /// Create an error for a label absent from the vertex set
    pub fn unknown_label(label: impl Into<String>) -> Self {
        WalkError::UnknownLabel {
            label: label.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WalkError::UsageError(_) => ExitCode::Usage,

            WalkError::UnknownLabel { .. }
            | WalkError::DuplicateLabel { .. }
            | WalkError::CyclicGraph { .. }
            | WalkError::NegativeWeight { .. }
            | WalkError::InvalidDot { .. } => ExitCode::Data,

            WalkError::EmptyQueue | WalkError::Io(_) | WalkError::Json(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier used in JSON error envelopes
    fn error_type(&self) -> &'static str {
        match self {
            WalkError::UsageError(_) => "usage_error",
            WalkError::UnknownLabel { .. } => "unknown_label",
            WalkError::DuplicateLabel { .. } => "duplicate_label",
            WalkError::CyclicGraph { .. } => "cyclic_graph",
            WalkError::NegativeWeight { .. } => "negative_weight",
            WalkError::InvalidDot { .. } => "invalid_dot",
            WalkError::EmptyQueue => "empty_queue",
            WalkError::Io(_) => "io_error",
            WalkError::Json(_) => "json_error",
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

/// Result type alias for dotwalk operations
pub type Result<T> = std::result::Result<T, WalkError>;
