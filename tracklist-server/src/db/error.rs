use std::path::PathBuf;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("TLS CA certificate not found at {}", .0.display())]
    MissingCaFile(PathBuf),
}
