//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Unknown synthetic image name
    #[error("unknown synthetic image '{name}'")]
    UnknownImage { name: String },

    /// Synthetic image could not be built
    #[error("failed to build image '{name}': {message}")]
    ImageBuild { name: String, message: String },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
