//! V1 version API routes
mod auth;
mod exercise;
mod news;
mod resource;
mod study;
mod user;

use crate::{
    middleware::{auth::Authentication, permission::Permission},
    rbac::PermRegistry,
};
use actix_web::web;
use edu_error::{rbac::RBACError, WebResult};

/// Configure all v1 routes
pub fn configure_v1_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_public_routes)
        .configure(configure_protected_routes);
}

/// Configure public routes that don't require authentication
fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        format!("{}/login", auth::ROUTER_PREFIX).as_str(),
        web::post().to(auth::login),
    )
    .route(
        format!("{}/request", user::ROUTER_PREFIX).as_str(),
        web::post().to(user::request_account),
    );
}

/// Helper function to configure protected routes behind authentication and permission checks
fn configure_protected_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .wrap(Permission)
            .wrap(Authentication)
            .service(web::scope(study::ROUTER_PREFIX).configure(study::configure_routes))
            .service(web::scope(exercise::ROUTER_PREFIX).configure(exercise::configure_routes))
            .service(web::scope(news::ROUTER_PREFIX).configure(news::configure_routes))
            .service(web::scope(user::ROUTER_PREFIX).configure(user::configure_routes)),
    );
}

/// Initialize RBAC rules for all v1 API modules
pub fn init_rbac_rules(router_prefix: &str, registry: &mut PermRegistry) -> WebResult<(), RBACError> {
    study::init_rbac_rules(router_prefix, registry)?;
    exercise::init_rbac_rules(router_prefix, registry)?;
    news::init_rbac_rules(router_prefix, registry)?;
    user::init_rbac_rules(router_prefix, registry)?;
    Ok(())
}
