use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr, TransactionError};
use serde_json::json;
use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced to HTTP clients.
///
/// Every variant maps onto one status code and is rendered as
/// `{"statusCode": <code>, "message": <text>}`.
#[derive(Error, Debug)]
pub enum WebError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    InternalError(String),
    #[error("{0}")]
    StorageError(StorageError),
}

impl From<StorageError> for WebError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::EntityNotFound(msg) => WebError::NotFound(msg),
            StorageError::DBError(e) => e.into(),
            other => WebError::StorageError(other),
        }
    }
}

/// Message for writes rejected by a unique index.
pub const DUPLICATE_ENTRY: &str = "Duplicate entry";

impl From<DbErr> for WebError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                WebError::BadRequest(DUPLICATE_ENTRY.into())
            }
            _ => WebError::StorageError(StorageError::DBError(e)),
        }
    }
}

impl From<TransactionError<WebError>> for WebError {
    fn from(e: TransactionError<WebError>) -> Self {
        match e {
            TransactionError::Connection(e) => e.into(),
            TransactionError::Transaction(e) => e,
        }
    }
}

impl From<std::io::Error> for WebError {
    fn from(e: std::io::Error) -> Self {
        WebError::InternalError(e.to_string())
    }
}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            WebError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            WebError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::Forbidden(_) => StatusCode::FORBIDDEN,
            WebError::InternalError(_) | WebError::StorageError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(json!({
            "statusCode": status.as_u16(),
            "message": self.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn renders_status_code_and_message() {
        let err = WebError::NotFound("Lesson not found".into());
        let res = err.error_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(res.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["statusCode"], 404);
        assert_eq!(value["message"], "Lesson not found");
    }

    #[test]
    fn entity_not_found_maps_to_not_found() {
        let err: WebError = StorageError::EntityNotFound("Exercise not found".into()).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Exercise not found");
    }

    #[test]
    fn other_db_errors_stay_storage_errors() {
        let err: WebError = DbErr::RecordNotInserted.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err: WebError = StorageError::DBError(DbErr::Custom("boom".into())).into();
        assert!(matches!(err, WebError::StorageError(_)));
    }

    #[test]
    fn db_errors_are_internal() {
        let err: WebError = DbErr::Custom("boom".into()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
