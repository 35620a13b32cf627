use super::resource;
use crate::rbac::{Capability, PermRegistry};
use actix_web::{http::Method, web};
use edu_error::{rbac::RBACError, WebResult};
use edu_models::{
    domain::prelude::{NewNews, NewsPageParams, UpdateNews},
    entities::prelude::News,
};
use tracing::{info, instrument};

pub(super) const ROUTER_PREFIX: &str = "/news";

pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(resource::create::<News, NewNews>))
        .route("", web::get().to(resource::page::<News, NewsPageParams>))
        .route("/{id}", web::get().to(resource::get::<News>))
        .route("/{id}", web::patch().to(resource::update::<News, UpdateNews>))
        .route("/{id}", web::delete().to(resource::delete::<News>));
}

#[inline]
#[instrument(name = "init-news-rbac", skip(router_prefix, registry))]
pub(crate) fn init_rbac_rules(
    router_prefix: &str,
    registry: &mut PermRegistry,
) -> WebResult<(), RBACError> {
    info!("Initializing news module RBAC rules...");
    let base = format!("{router_prefix}{ROUTER_PREFIX}");

    registry.register(Method::POST, base.clone(), Capability::ManageAdmin)?;
    registry.register(Method::GET, base.clone(), Capability::Authenticated)?;
    registry.register(Method::GET, format!("{base}/{{id}}"), Capability::Authenticated)?;
    registry.register(Method::PATCH, format!("{base}/{{id}}"), Capability::ManageAdmin)?;
    registry.register(Method::DELETE, format!("{base}/{{id}}"), Capability::ManageAdmin)?;

    info!("News module RBAC rules initialized successfully");
    Ok(())
}
