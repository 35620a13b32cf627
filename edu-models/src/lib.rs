pub mod constants;
pub mod domain;
pub mod entities;
pub mod enums;
pub mod idens;
pub mod settings;
pub mod web;

use async_trait::async_trait;
use edu_error::{init::InitContextError, storage::StorageError, EduResult};
use sea_orm::DatabaseConnection;
use settings::Settings;
use std::sync::Arc;

/// Owner of the database connection pool.
#[async_trait]
pub trait DbManager: Send + Sync + 'static {
    /// Connects, migrates and seeds the database described by `settings`.
    async fn init(settings: &Settings) -> EduResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Returns a cloned handle to the connection pool.
    fn get_connection(&self) -> EduResult<DatabaseConnection, StorageError>;

    /// Closes every pooled connection.
    async fn close(&self) -> EduResult<()>;
}

/// HTTP front door of the application.
#[async_trait]
pub trait WebServer: Send + Sync + 'static {
    /// Binds the listener and starts serving in the background.
    async fn init(
        settings: &Settings,
        db: DatabaseConnection,
    ) -> EduResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Stops accepting connections and drains in-flight requests.
    async fn stop(&self) -> EduResult<()>;
}
