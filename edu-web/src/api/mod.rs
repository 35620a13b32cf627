//! Router module for handling all API routes

pub mod public;
pub mod v1;

use actix_web::web;
use edu_error::{rbac::RBACError, EduResult};
use tracing::{info, instrument};

use crate::rbac::PermRegistry;

/// Configure all routes mounted under the router prefix
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(v1::configure_v1_routes);
}

/// Configure public root routes (mounted outside the router prefix).
pub fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(public::configure_public_routes);
}

/// Registers the capability of every protected route.
/// This should be called once during application startup
#[inline]
#[instrument(name = "init-rbac-rules", skip(router_prefix, registry))]
pub fn init_rbac_rules(router_prefix: &str, registry: &mut PermRegistry) -> EduResult<(), RBACError> {
    info!("Initializing all RBAC rules for protected routes...");
    v1::init_rbac_rules(router_prefix, registry)?;
    info!(rules = registry.len(), "All RBAC rules initialized successfully");
    Ok(())
}
