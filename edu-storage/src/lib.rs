mod migration;
mod seed;
mod sql;

use async_trait::async_trait;
use edu_error::{init::InitContextError, storage::StorageError, EduResult};
use edu_models::{settings::Settings, DbManager};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use sql::sqlite;
use std::sync::Arc;
use tracing::{info, instrument};

/// Global database manager struct
pub struct EduDbManager {
    db_conn: Option<DatabaseConnection>,
}

#[async_trait]
impl DbManager for EduDbManager {
    #[inline]
    #[instrument(name = "init-db-manager", skip_all)]
    async fn init(settings: &Settings) -> EduResult<Arc<Self>, InitContextError> {
        let db = sqlite::init_db(&settings.db.sqlite).await.map_err(|e| {
            InitContextError::Primitive(format!("Failed to init SQLite database: {e}"))
        })?;

        Migrator::up(&db, None).await.map_err(|e| {
            InitContextError::Primitive(format!("Failed to migrate SQLite database: {e}"))
        })?;

        seed::ensure_admin(&db, &settings.admin).await.map_err(|e| {
            InitContextError::Primitive(format!("Failed to seed administrator: {e}"))
        })?;

        info!("Database manager initialized successfully");
        Ok(Arc::new(EduDbManager { db_conn: Some(db) }))
    }

    #[inline]
    fn get_connection(&self) -> EduResult<DatabaseConnection, StorageError> {
        self.db_conn
            .as_ref()
            .ok_or(StorageError::StorageUnavailable)
            .cloned()
    }

    #[inline]
    #[instrument(name = "db_close", skip_all)]
    async fn close(&self) -> EduResult<()> {
        info!("Closing database connections...");
        if let Some(db) = &self.db_conn {
            db.clone().close().await?;
        }
        info!("Database connections closed successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edu_models::{
        entities::prelude::{User, UserColumn},
        enums::common::Role,
        settings::{Db, Inner, Sqlite},
    };
    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

    fn memory_settings() -> Settings {
        Inner {
            db: Db {
                sqlite: Sqlite::memory(),
            },
            ..Default::default()
        }
        .into()
    }

    #[tokio::test]
    async fn init_migrates_and_seeds_a_single_admin() {
        let settings = memory_settings();
        let manager = EduDbManager::init(&settings).await.unwrap();
        let db = manager.get_connection().unwrap();

        let admins = User::find()
            .filter(UserColumn::Role.eq(Role::Admin))
            .count(&db)
            .await
            .unwrap();
        assert_eq!(admins, 1);

        // a second pass over the same database must not duplicate the admin
        seed::ensure_admin(&db, &settings.admin).await.unwrap();
        let admins = User::find()
            .filter(UserColumn::Role.eq(Role::Admin))
            .count(&db)
            .await
            .unwrap();
        assert_eq!(admins, 1);

        manager.close().await.unwrap();
    }
}
