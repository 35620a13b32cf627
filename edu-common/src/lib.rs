//! Process wiring for the learning platform backend.
//!
//! [`EduAppContext`] loads settings, starts logging, opens the database and
//! boots the web server, then waits for a shutdown signal.
mod logger;

pub use edu_error::{EduError, EduResult};

use edu_error::init::InitContextError;

use edu_models::{settings::Settings, DbManager, WebServer};
use logger::Logger;
use std::{
    future::Future,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
#[cfg(windows)]
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tokio_util::{sync::CancellationToken, task::TaskTracker};
use tracing::{info, instrument, span, Level};

pub struct EduAppContext {
    /// Global settings
    settings: Settings,
    /// Global logger
    logger: Logger,
    /// Database manager
    db_manager: Option<Arc<dyn DbManager>>,
    /// Web server
    web_server: Option<Arc<dyn WebServer>>,
    /// Flag to prevent duplicate shutdowns
    shutting_down: AtomicBool,
    /// Shutdown token
    shutdown_token: CancellationToken,
}

impl EduAppContext {
    /// Builds the context from a config file path.
    ///
    /// Components start in dependency order: logger, database, web server.
    pub async fn init<D, W>(config: String) -> EduResult<Self>
    where
        D: DbManager + 'static,
        W: WebServer + 'static,
    {
        let settings = Settings::new(config)?;

        let mut logger = Logger::from_level_name(&settings.general.log_level);
        logger.initialize()?;

        let span = span!(Level::INFO, "init-app");
        let _guard = span.enter();

        let mut ctx = EduAppContext {
            settings,
            logger,
            db_manager: None,
            web_server: None,
            shutting_down: AtomicBool::new(false),
            shutdown_token: CancellationToken::new(),
        };

        ctx.init_db_manager::<D>().await?;
        ctx.init_web_server::<W>().await?;
        Ok(ctx)
    }

    async fn init_db_manager<D: DbManager + 'static>(&mut self) -> EduResult<()> {
        self.db_manager = Some(D::init(&self.settings).await?);
        info!("Database initialized successfully.");
        Ok(())
    }

    async fn init_web_server<W: WebServer + 'static>(&mut self) -> EduResult<()> {
        let db = self.db_manager()?.get_connection()?;
        self.web_server = Some(W::init(&self.settings, db).await?);
        info!("Web server initialized successfully.");
        Ok(())
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    /// Gets a reference to the database manager
    pub fn db_manager(&self) -> EduResult<Arc<dyn DbManager>> {
        self.db_manager
            .as_ref()
            .ok_or_else(|| InitContextError::NotInitialized("database manager".into()).into())
            .map(Arc::clone)
    }

    #[inline]
    /// Gets a reference to the web server
    pub fn web_server(&self) -> EduResult<Arc<dyn WebServer>> {
        self.web_server
            .as_ref()
            .ok_or_else(|| InitContextError::NotInitialized("web server".into()).into())
            .map(Arc::clone)
    }

    #[inline]
    pub fn change_log_level(&self, level: Level) {
        self.logger.set_level(level);
    }

    /// Requests a shutdown without waiting for an OS signal.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown_token.clone()
    }

    /// Serves until SIGINT, SIGTERM, SIGHUP or SIGQUIT, then shuts down.
    pub async fn run(&self) -> EduResult<()> {
        self.listen_for_shutdown(async { self.graceful_shutdown().await })
            .await
    }

    async fn listen_for_shutdown<F>(&self, shutdown_fn: F) -> EduResult<()>
    where
        F: Future<Output = EduResult<()>>,
    {
        let shutdown_token = self.shutdown_token.clone();

        #[cfg(unix)]
        {
            let mut sigterm = signal(SignalKind::terminate())?;
            let mut sigint = signal(SignalKind::interrupt())?;
            let mut sighup = signal(SignalKind::hangup())?;
            let mut sigquit = signal(SignalKind::quit())?;

            tokio::select! {
                _ = sigterm.recv() => {
                    info!("Received SIGTERM signal");
                }
                _ = sigint.recv() => {
                    info!("Received SIGINT signal");
                }
                _ = sighup.recv() => {
                    info!("Received SIGHUP signal");
                }
                _ = sigquit.recv() => {
                    info!("Received SIGQUIT signal");
                }
                _ = shutdown_token.cancelled() => {}
            }
        }

        #[cfg(windows)]
        {
            tokio::select! {
                _ = ctrl_c() => {
                    info!("Received ctrl-c signal");
                }
                _ = shutdown_token.cancelled() => {}
            }
        }

        shutdown_fn.await
    }

    #[inline]
    #[instrument(name = "graceful-shutdown", skip_all)]
    /// Stops the web server, then closes the database. Repeated calls are no-ops.
    pub async fn graceful_shutdown(&self) -> EduResult<()> {
        if self.shutting_down.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        info!("Starting graceful shutdown...");

        if let Some(web_server) = &self.web_server {
            if let Err(e) = web_server.stop().await {
                return Err(EduError::ShutdownError(e.to_string()));
            }
        }

        let tracker = TaskTracker::new();
        if let Some(db_manager) = &self.db_manager {
            let db_manager = Arc::clone(db_manager);
            tracker.spawn(async move {
                let _ = db_manager.close().await;
            });
        }

        info!("Waiting for all components to shutdown gracefully...");
        tracker.close();
        tracker.wait().await;

        info!("Graceful shutdown completed successfully");
        Ok(())
    }
}
