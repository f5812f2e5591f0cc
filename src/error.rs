//! Error types for the Contact Book MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{ContactKind, ValidationError};
use thiserror::Error;

/// Errors that can occur when mutating or addressing the contact repository.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The position does not name an entry of the list
    #[error("Index {index} is out of range for the {kind} list (length {len})")]
    IndexOutOfRange {
        kind: ContactKind,
        index: usize,
        len: usize,
    },
}

/// Errors surfaced by the contact service to its callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Caller input was rejected before reaching the repository
    #[error("Input error: {0}")]
    Validation(#[from] ValidationError),

    /// The repository refused the operation
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
