//! Storage error type

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("invalid database configuration: {0}")]
    Config(&'static str),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
