pub mod init;
pub mod rbac;
pub mod storage;
pub mod web;

use anyhow::Error as AnyhowError;
use config::ConfigError;
use init::InitContextError;
use sea_orm::{DbErr, TransactionError};
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use storage::StorageError;
use thiserror::Error;
use tokio::task::JoinError;
use web::WebError;

pub type EduResult<T, E = EduError> = anyhow::Result<T, E>;
pub type WebResult<T, E = WebError> = anyhow::Result<T, E>;
pub type StorageResult<T, E = StorageError> = Result<T, E>;

/// Process level error returned by startup, shutdown and context wiring.
#[derive(Error, Debug, Default)]
pub enum EduError {
    #[error("service unavailable")]
    #[default]
    ServiceUnavailable,
    #[error("{0}")]
    JoinError(#[from] JoinError),
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Msg(String),
    #[error("{0}")]
    Anyhow(#[from] AnyhowError),
    #[error("{0}")]
    Json(#[from] SerdeJsonError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    StorageError(#[from] StorageError),
    #[error("{0}")]
    InitContextError(#[from] InitContextError),
    #[error("{0}")]
    WebError(#[from] WebError),
    #[error("Shutdown error: {0}")]
    ShutdownError(String),
}

impl From<String> for EduError {
    #[inline]
    fn from(e: String) -> Self {
        EduError::Msg(e)
    }
}

impl From<&str> for EduError {
    #[inline]
    fn from(e: &str) -> Self {
        EduError::Msg(e.to_string())
    }
}

impl From<DbErr> for EduError {
    #[inline]
    fn from(e: DbErr) -> Self {
        EduError::StorageError(StorageError::DBError(e))
    }
}

impl From<TransactionError<EduError>> for EduError {
    #[inline]
    fn from(e: TransactionError<EduError>) -> Self {
        match e {
            TransactionError::Connection(e) => e.into(),
            TransactionError::Transaction(e) => e,
        }
    }
}
