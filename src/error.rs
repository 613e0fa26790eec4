//! Error types for vimax-doctor operations.
//!
//! This module defines [`DoctorError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! Every anticipated failure mode of a check (missing interpreter, import
//! failure, unreadable config file) is converted into report data at the
//! point it occurs and never propagates as an error. `DoctorError` is
//! reserved for conditions the checks do not anticipate, such as a broken
//! completion stream or an internal serialization failure.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for vimax-doctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// The resolved project root does not exist or is not a directory.
    #[error("Project root is not a directory: {path}")]
    ProjectRootInvalid { path: PathBuf },

    /// Failed to serialize the check report.
    #[error("Failed to render report: {message}")]
    ReportSerialization { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for vimax-doctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_root_invalid_displays_path() {
        let err = DoctorError::ProjectRootInvalid {
            path: PathBuf::from("/no/such/dir"),
        };
        assert!(err.to_string().contains("/no/such/dir"));
    }

    #[test]
    fn report_serialization_displays_message() {
        let err = DoctorError::ReportSerialization {
            message: "key must be a string".into(),
        };
        assert!(err.to_string().contains("key must be a string"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DoctorError = io_err.into();
        assert!(matches!(err, DoctorError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(DoctorError::ProjectRootInvalid {
                path: PathBuf::from("/tmp/x"),
            })
        }
        assert!(returns_error().is_err());
    }
}
