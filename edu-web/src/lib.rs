//! HTTP surface of the learning platform backend.
mod api;
mod middleware;
mod rbac;

pub use rbac::{Capability, PermRegistry};

use actix_web::{
    dev::{Server, ServerHandle},
    middleware::{Logger, NormalizePath},
    web::{self, Data},
    App, HttpRequest, HttpServer,
};
use actix_web_validator::{Error as ValidationError, JsonConfig, PathConfig, QueryConfig};
use async_trait::async_trait;
use edu_error::{init::InitContextError, rbac::RBACError, web::WebError, EduError, EduResult};
use edu_models::{settings::Settings, WebServer};
use middleware::cors::middleware;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub settings: Settings,
    pub perms: Arc<PermRegistry>,
}

impl AppState {
    /// Builds the state and registers the capability of every protected route.
    pub fn new(settings: Settings, db: DatabaseConnection) -> EduResult<Self, RBACError> {
        let mut perms = PermRegistry::default();
        api::init_rbac_rules(&settings.web.router_prefix, &mut perms)?;
        Ok(AppState {
            db,
            settings,
            perms: Arc::new(perms),
        })
    }
}

fn validation_error(err: ValidationError, _req: &HttpRequest) -> actix_web::Error {
    WebError::BadRequest(err.to_string()).into()
}

/// Mounts state, extractor configuration and every route.
///
/// Middleware that belongs to the whole application (CORS, access log) is
/// added by [`EduWebServer`].
pub fn configure_app(cfg: &mut web::ServiceConfig, state: AppState) {
    let router_prefix = state.settings.web.router_prefix.clone();
    cfg.app_data(Data::new(state))
        .app_data(JsonConfig::default().error_handler(validation_error))
        .app_data(QueryConfig::default().error_handler(validation_error))
        .app_data(PathConfig::default().error_handler(validation_error))
        .configure(api::configure_public_routes)
        .service(web::scope(&router_prefix).configure(api::configure_routes));
}

/// EduWebServer handles the web server initialization and management
#[derive(Clone)]
pub struct EduWebServer {
    /// Server handle for graceful shutdown
    server: Arc<Mutex<Option<ServerHandle>>>,
}

impl EduWebServer {
    fn create_server(settings: &Settings, db: DatabaseConnection) -> EduResult<Server> {
        let state = AppState::new(settings.clone(), db)
            .map_err(|e| EduError::from(format!("Failed to initialize RBAC rules: {e}")))?;

        let addr = format!("{}:{}", settings.web.host, settings.web.port);
        let worker_count = settings.web.get_worker_count();
        let cors_config = settings.web.cors.clone();

        let server = HttpServer::new(move || {
            let state = state.clone();
            App::new()
                .wrap(middleware(&cors_config))
                .wrap(Logger::default())
                .wrap(NormalizePath::trim())
                .configure(|cfg| configure_app(cfg, state))
        })
        .workers(worker_count)
        .bind(&addr)
        .map_err(|e| EduError::from(format!("Failed to bind HTTP server to {addr}: {e}")))?;

        info!(%addr, workers = worker_count, "HTTP server bound");
        Ok(server.run())
    }
}

#[async_trait]
impl WebServer for EduWebServer {
    #[inline]
    #[instrument(name = "init-web-server", skip_all)]
    /// Initialize and start the web server
    async fn init(
        settings: &Settings,
        db: DatabaseConnection,
    ) -> EduResult<Arc<Self>, InitContextError> {
        let server = Self::create_server(settings, db).map_err(|e| {
            InitContextError::Primitive(format!("Failed to create web server: {e}"))
        })?;
        let server_handle = server.handle();

        tokio::spawn(async move {
            if let Err(e) = server.await {
                error!(error=%e, "Web server failed to start");
            }
        });

        Ok(Arc::new(EduWebServer {
            server: Arc::new(Mutex::new(Some(server_handle))),
        }))
    }

    #[inline]
    #[instrument(name = "web-server-stop", skip_all)]
    /// Gracefully stop the web server
    async fn stop(&self) -> EduResult<()> {
        info!("Stopping web server...");
        let mut server_guard = self.server.lock().await;
        if let Some(handle) = server_guard.take() {
            handle.stop(true).await;
        }
        info!("Web server stopped successfully");

        Ok(())
    }
}
