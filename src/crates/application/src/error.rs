use domain::book::BookError;
use domain::genre::GenreError;
use thiserror::Error;

/// Application level failures. The payload is the message handed back to the
/// client, so every variant displays as its payload alone.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),
    /// The book exists but is filed under another genre.
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Unauthenticated(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    AlreadyExists(String),
    #[error("{0}")]
    FailedPrecondition(String),
}

impl From<BookError> for AppError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::ValidationErr(msg) => AppError::InvalidInput(msg),
        }
    }
}

impl From<GenreError> for AppError {
    fn from(err: GenreError) -> Self {
        match err {
            GenreError::ValidationErr(msg) => AppError::InvalidInput(msg),
        }
    }
}
