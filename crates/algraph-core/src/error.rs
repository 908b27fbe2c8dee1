//! Error types and exit codes for algraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid call on a structure)
//! - 3: Data/input error (malformed graph description, out-of-range vertex)

mod macros;

use thiserror::Error;

/// Exit codes for the algraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/input error - malformed graph description (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building structures or running algorithms
#[derive(Error, Debug)]
pub enum AlgoError {
    // Precondition violations on graphs and results
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("invalid edge weight: {value}")]
    InvalidWeight { value: f64 },

    #[error("negative cycle reachable from the source; distances are undefined")]
    NegativeCycle,

    // Precondition violations on priority queues
    #[error("index {index} is outside queue capacity {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },

    #[error("index {index} is already in the priority queue")]
    DuplicateIndex { index: usize },

    #[error("index {index} is not in the priority queue")]
    MissingIndex { index: usize },

    #[error("priority queue underflow")]
    EmptyQueue,

    #[error("invalid capacity: {capacity} (must be greater than zero)")]
    InvalidCapacity { capacity: usize },

    #[error("cannot {direction} key of index {index}: new key does not {direction} it")]
    InvalidKeyChange {
        index: usize,
        direction: &'static str,
    },

    // Input errors
    #[error("invalid graph description at line {line}: {reason}")]
    InvalidInput { line: usize, reason: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    UsageError(String),

    // Generic failures
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl AlgoError {
    /// Create an error for a vertex outside `0..vertex_count`
    pub fn vertex_out_of_range(vertex: usize, vertex_count: usize) -> Self {
        AlgoError::VertexOutOfRange {
            vertex,
            vertex_count,
        }
    }

    /// Create an error for a malformed line in a graph description
    pub fn invalid_input(line: usize, reason: impl std::fmt::Display) -> Self {
        AlgoError::InvalidInput {
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        AlgoError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AlgoError::UsageError(_)
            | AlgoError::InvalidValue { .. }
            | AlgoError::IndexOutOfRange { .. }
            | AlgoError::DuplicateIndex { .. }
            | AlgoError::MissingIndex { .. }
            | AlgoError::EmptyQueue
            | AlgoError::InvalidCapacity { .. }
            | AlgoError::InvalidKeyChange { .. } => ExitCode::Usage,

            AlgoError::VertexOutOfRange { .. }
            | AlgoError::InvalidWeight { .. }
            | AlgoError::InvalidInput { .. }
            | AlgoError::NegativeCycle => ExitCode::Data,

            AlgoError::Io(_) | AlgoError::Toml(_) | AlgoError::Json(_) | AlgoError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            AlgoError::VertexOutOfRange { .. } => "vertex_out_of_range",
            AlgoError::InvalidWeight { .. } => "invalid_weight",
            AlgoError::NegativeCycle => "negative_cycle",
            AlgoError::IndexOutOfRange { .. } => "index_out_of_range",
            AlgoError::DuplicateIndex { .. } => "duplicate_index",
            AlgoError::MissingIndex { .. } => "missing_index",
            AlgoError::EmptyQueue => "empty_queue",
            AlgoError::InvalidCapacity { .. } => "invalid_capacity",
            AlgoError::InvalidKeyChange { .. } => "invalid_key_change",
            AlgoError::InvalidInput { .. } => "invalid_input",
            AlgoError::InvalidValue { .. } => "invalid_value",
            AlgoError::UsageError(_) => "usage_error",
            AlgoError::Io(_) => "io_error",
            AlgoError::Toml(_) => "toml_error",
            AlgoError::Json(_) => "json_error",
            AlgoError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for algraph operations
pub type Result<T> = std::result::Result<T, AlgoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(AlgoError::EmptyQueue.exit_code(), ExitCode::Usage);
        assert_eq!(AlgoError::NegativeCycle.exit_code(), ExitCode::Data);
        assert_eq!(
            AlgoError::invalid_input(3, "missing weight").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            AlgoError::Other("boom".to_string()).exit_code(),
            ExitCode::Failure
        );
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_vertex_out_of_range_message() {
        let err = AlgoError::vertex_out_of_range(7, 4);
        assert_eq!(err.to_string(), "vertex 7 is out of range for a graph with 4 vertices");
    }

    #[test]
    fn test_to_json_envelope() {
        let json = AlgoError::DuplicateIndex { index: 2 }.to_json();
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "duplicate_index");
        assert_eq!(
            json["error"]["message"],
            "index 2 is already in the priority queue"
        );
    }
}
