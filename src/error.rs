//! Error types for the dockgen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for dockgen operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum DockgenError {
    /// User provided invalid arguments or the inputs are unusable.
    #[error("{0}")]
    UserError(String),

    /// COPY sources were missing and the caller asked for a hard failure.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// The model runner could not be started or its pipes failed.
    #[error("Generator failed: {0}")]
    GeneratorError(String),

    /// The generated Dockerfile could not be written.
    #[error("Write failed: {0}")]
    WriteError(String),
}

impl DockgenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DockgenError::UserError(_) => exit_codes::USER_ERROR,
            DockgenError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            DockgenError::GeneratorError(_) => exit_codes::GENERATOR_FAILURE,
            DockgenError::WriteError(_) => exit_codes::WRITE_FAILURE,
        }
    }
}

/// Result type alias for dockgen operations.
pub type Result<T> = std::result::Result<T, DockgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = DockgenError::UserError("prompt_template.txt is missing".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn validation_error_has_correct_exit_code() {
        let err = DockgenError::ValidationError("2 COPY sources missing".to_string());
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn generator_error_has_correct_exit_code() {
        let err = DockgenError::GeneratorError("ollama not found".to_string());
        assert_eq!(err.exit_code(), exit_codes::GENERATOR_FAILURE);
    }

    #[test]
    fn write_error_has_correct_exit_code() {
        let err = DockgenError::WriteError("read-only filesystem".to_string());
        assert_eq!(err.exit_code(), exit_codes::WRITE_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = DockgenError::UserError("prompt_template.txt is missing.".to_string());
        assert_eq!(err.to_string(), "prompt_template.txt is missing.");

        let err = DockgenError::ValidationError("1 COPY source missing".to_string());
        assert_eq!(err.to_string(), "Validation failed: 1 COPY source missing");
    }
}
