//! Domain error kinds

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("media with the same name already exists")]
    DuplicateName,

    #[error("media not found")]
    NotFound,

    #[error("database error: {0}")]
    Store(#[from] sqlx::Error),
}
