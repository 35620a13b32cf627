use edu_error::EduResult;
use edu_models::settings::Sqlite;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::{info, instrument, log::LevelFilter};

/// Opens the SQLite pool described by `config`.
///
/// File databases are created on demand when `auto_create` is set (`mode=rwc`).
/// An in-memory database lives as long as its single pooled connection, so the
/// pool never reaps it.
#[instrument(name = "init_sqlite_db", skip_all)]
pub async fn init_db(config: &Sqlite) -> EduResult<DatabaseConnection> {
    let database_url = config.to_url();

    let mut opts = ConnectOptions::new(&database_url);
    opts.connect_timeout(Duration::from_millis(config.timeout))
        .max_connections(config.max_connections);

    if config.is_memory() {
        opts.min_connections(1);
    } else {
        opts.idle_timeout(Duration::from_millis(config.idle_timeout))
            .max_lifetime(Duration::from_millis(config.max_lifetime));
    }

    #[cfg(debug_assertions)]
    {
        opts.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    }
    #[cfg(not(debug_assertions))]
    {
        opts.sqlx_logging(false)
            .sqlx_logging_level(LevelFilter::Off);
    }

    if config.is_memory() {
        info!("Opening in-memory SQLite database");
    } else {
        info!(
            "Connecting to SQLite database at: {}/{} (auto_create: {})",
            config.db_dir(),
            config.path,
            config.auto_create
        );
        std::fs::create_dir_all(config.db_dir())?;
    }

    let db = Database::connect(opts).await?;
    #[cfg(not(debug_assertions))]
    {
        use sea_orm::{ConnectionTrait, DbBackend, Statement};
        for pragma in ["PRAGMA synchronous=NORMAL;", "PRAGMA temp_store=MEMORY;"] {
            let _ = db
                .execute(Statement::from_string(DbBackend::Sqlite, pragma.to_string()))
                .await;
        }
    }
    info!("Successfully connected to SQLite database");

    Ok(db)
}
