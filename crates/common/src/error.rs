//! Error types for the common crate
//!
//! This module defines the error type shared by all bootstrap crates. The
//! variants mirror the outcomes an individual artifact fetch can have:
//! a missing remote file, a rejected or absent credential, or a transfer
//! that died partway through.

use thiserror::Error;

/// Result type for bootstrap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for bootstrap operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote repo or file path does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Credential missing or insufficient for a gated artifact
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Network or storage failure mid-transfer
    #[error("Transfer failed: {0}")]
    TransferFailed(String),
}

impl Error {
    /// Returns true if the error is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Returns true if the error is an unauthorized error
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized(_))
    }

    /// Returns true if the error is a transfer failure
    pub fn is_transfer_failed(&self) -> bool {
        matches!(self, Error::TransferFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_match_variants() {
        assert!(Error::NotFound("x".into()).is_not_found());
        assert!(Error::Unauthorized("x".into()).is_unauthorized());
        assert!(Error::TransferFailed("x".into()).is_transfer_failed());
        assert!(!Error::Config("x".into()).is_not_found());
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
