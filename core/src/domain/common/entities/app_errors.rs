use thiserror::Error;

use crate::domain::query::errors::QueryError;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Internal server error")]
    InternalServerError,

    #[error("Object storage error: {0}")]
    ObjectStorageError(String),

    #[error(transparent)]
    Query(#[from] QueryError),
}
