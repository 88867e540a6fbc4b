use thiserror::Error;

/// Domain-level error taxonomy. The API layer maps `Validation` to 400 and
/// everything else to 500.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    ExternalServiceError(String),

    #[error("internal server error")]
    InternalServerError,
}
