use sea_orm::{DbErr, TransactionError};
use thiserror::Error;

#[derive(Error, Debug, Default)]
pub enum StorageError {
    #[error("database unavailable")]
    #[default]
    StorageUnavailable,

    #[error("database error: `{0}`")]
    DBError(#[from] DbErr),

    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

impl From<TransactionError<StorageError>> for StorageError {
    #[inline]
    fn from(e: TransactionError<StorageError>) -> Self {
        match e {
            TransactionError::Connection(e) => StorageError::DBError(e),
            TransactionError::Transaction(e) => e,
        }
    }
}
