use thiserror::Error;

/// Errors raised by the storage layer.
///
/// `NotFound` is only produced by single-row reads. Updates and deletes that
/// match nothing are not errors; they report zero affected rows instead.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no {kind} with id {id}")]
    NotFound { kind: &'static str, id: i64 },

    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to prepare storage directory: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}
