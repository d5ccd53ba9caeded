//! CLI error types and exit codes

use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad arguments or options
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Input file missing or unreadable
    #[error("file error: {0}")]
    File(String),

    /// Rendering the results failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl CliError {
    /// The exit code this error maps to.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::InvalidInput(_) => ExitCode::InvalidInput,
            CliError::File(_) => ExitCode::FileError,
            CliError::Serialization(_) => ExitCode::InternalError,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::File(error.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::Serialization(error.to_string())
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(error: serde_yaml::Error) -> Self {
        CliError::Serialization(error.to_string())
    }
}

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Examination clean, nothing flagged
    Success = 0,
    /// Failed rules or validation errors
    ExaminationFailed = 1,
    /// Warnings only
    Warning = 2,
    /// Invalid input or arguments
    InvalidInput = 3,
    /// File not found or inaccessible
    FileError = 4,
    /// Internal error
    InternalError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Determine the exit code from examination findings.
    pub fn from_findings(has_failures: bool, has_warnings: bool) -> Self {
        if has_failures {
            ExitCode::ExaminationFailed
        } else if has_warnings {
            ExitCode::Warning
        } else {
            ExitCode::Success
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_conversion() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::ExaminationFailed), 1);
        assert_eq!(i32::from(ExitCode::Warning), 2);
        assert_eq!(i32::from(ExitCode::InternalError), 10);
    }

    #[test]
    fn test_exit_code_from_findings() {
        assert_eq!(ExitCode::from_findings(false, false), ExitCode::Success);
        assert_eq!(
            ExitCode::from_findings(true, false),
            ExitCode::ExaminationFailed
        );
        assert_eq!(ExitCode::from_findings(false, true), ExitCode::Warning);
        assert_eq!(
            ExitCode::from_findings(true, true),
            ExitCode::ExaminationFailed
        );
    }

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(
            CliError::InvalidInput("bad".to_string()).exit_code(),
            ExitCode::InvalidInput
        );
        assert_eq!(
            CliError::File("gone".to_string()).exit_code(),
            ExitCode::FileError
        );
        assert_eq!(
            CliError::Serialization("broken".to_string()).exit_code(),
            ExitCode::InternalError
        );
    }
}
