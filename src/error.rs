use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// True when the underlying socket is gone and a cached connection is useless.
    pub fn is_connection_lost(&self) -> bool {
        matches!(self, AppError::Database(sqlx::Error::Io(_)) | AppError::Io(_))
    }
}
