//! User management API endpoints

use crate::{
    middleware::RequestContext,
    rbac::{Capability, PermRegistry},
    AppState,
};
use actix_web::{
    http::Method,
    web::{self, Data},
};
use actix_web_validator::{Json, Path, Query};
use edu_core::AccountService;
use edu_error::{rbac::RBACError, web::WebError, WebResult};
use edu_models::{
    domain::prelude::{
        AcceptRequest, ChangePassword, NewUser, NewUserRequest, PageResult, PathId, UpdateUser,
        UserPageParams, UserRequestPageParams,
    },
    entities::prelude::{UserModel, UserRequestModel},
    enums::common::EntityKind,
    web::WebResponse,
};
use tracing::{info, instrument};

pub(super) const ROUTER_PREFIX: &str = "/users";

/// Configure user routes
///
/// # Description
/// Static paths are registered ahead of `/{id}` so they are never captured as an id.
///
/// # Routes
/// - GET `/me`: Profile of the caller
/// - PATCH `/change-password/{id}`: Change a password
/// - POST ``: Create a user
/// - GET ``: Paginated users
/// - GET `/request`: Paginated account requests
/// - DELETE `/request/{id}`: Reject an account request
/// - POST `/accept-request`: Turn a request into an account
/// - GET `/{id}`: Retrieve a user
/// - PATCH `/{id}`: Update a user
/// - DELETE `/{id}`: Delete a user
///
/// `POST /request` is public and mounted outside this scope.
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/me", web::get().to(me))
        .route("/change-password/{id}", web::patch().to(change_password))
        .route("", web::post().to(create))
        .route("", web::get().to(page))
        .route("/request", web::get().to(request_page))
        .route("/request/{id}", web::delete().to(delete_request))
        .route("/accept-request", web::post().to(accept_request))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::patch().to(update))
        .route("/{id}", web::delete().to(delete));
}

/// Initialize RBAC rules for user module
#[inline]
#[instrument(name = "init-user-rbac", skip(router_prefix, registry))]
pub(crate) fn init_rbac_rules(
    router_prefix: &str,
    registry: &mut PermRegistry,
) -> WebResult<(), RBACError> {
    info!("Initializing user module RBAC rules...");
    let base = format!("{router_prefix}{ROUTER_PREFIX}");

    registry.register(Method::GET, format!("{base}/me"), Capability::Authenticated)?;
    registry.register(
        Method::PATCH,
        format!("{base}/change-password/{{id}}"),
        Capability::Authenticated,
    )?;
    registry.register(Method::POST, base.clone(), Capability::ManageAdmin)?;
    registry.register(Method::GET, base.clone(), Capability::ManageAdmin)?;
    registry.register(Method::GET, format!("{base}/request"), Capability::ManageAdmin)?;
    registry.register(Method::DELETE, format!("{base}/request/{{id}}"), Capability::ManageAdmin)?;
    registry.register(Method::POST, format!("{base}/accept-request"), Capability::ManageAdmin)?;
    registry.register(Method::GET, format!("{base}/{{id}}"), Capability::ManageAdmin)?;
    registry.register(Method::PATCH, format!("{base}/{{id}}"), Capability::ManageAdmin)?;
    registry.register(Method::DELETE, format!("{base}/{{id}}"), Capability::ManageAdmin)?;

    info!("User module RBAC rules initialized successfully");
    Ok(())
}

/// Retrieve the caller's profile
///
/// # Endpoint
/// `GET /v1/users/me`
///
/// # Errors
/// - Not Found (404): the account was deleted after the token was issued
async fn me(state: Data<AppState>, ctx: RequestContext) -> WebResult<WebResponse<UserModel>> {
    let claims = ctx.claims()?;
    let user = AccountService::me(&claims.user_id, &state.db).await?;
    Ok(WebResponse::ok(user))
}

/// Change a password
///
/// # Endpoint
/// `PATCH /v1/users/change-password/{id}`
///
/// # Description
/// Administrators may reset any account. Everyone else may only change their
/// own and must send the current password as `oldPassword`.
///
/// # Errors
/// - Unauthorized (401): `Password reset failed` whatever the reason
async fn change_password(
    state: Data<AppState>,
    ctx: RequestContext,
    path: Path<PathId>,
    body: Json<ChangePassword>,
) -> WebResult<WebResponse<()>> {
    let claims = ctx.claims()?;
    AccountService::change_password(claims, &path.id, body.into_inner(), &state.db).await?;
    Ok(WebResponse::no_content())
}

/// Create a user
///
/// # Endpoint
/// `POST /v1/users`
///
/// # Errors
/// - Bad Request (400): `Phone already taken`
async fn create(state: Data<AppState>, body: Json<NewUser>) -> WebResult<WebResponse<UserModel>> {
    let user = AccountService::create_user(body.into_inner(), &state.db).await?;
    Ok(WebResponse::created(user))
}

async fn page(
    state: Data<AppState>,
    params: Query<UserPageParams>,
) -> WebResult<WebResponse<PageResult<UserModel>>> {
    let page = AccountService::list_users(&params.into_inner(), &state.db).await?;
    Ok(WebResponse::ok(page))
}

async fn get_by_id(state: Data<AppState>, path: Path<PathId>) -> WebResult<WebResponse<UserModel>> {
    let user = AccountService::get_user(&path.id, &state.db)
        .await?
        .ok_or_else(|| WebError::NotFound(EntityKind::User.not_found()))?;
    Ok(WebResponse::ok(user))
}

async fn update(
    state: Data<AppState>,
    path: Path<PathId>,
    body: Json<UpdateUser>,
) -> WebResult<WebResponse<UserModel>> {
    let user = AccountService::update_user(&path.id, body.into_inner(), &state.db).await?;
    Ok(WebResponse::ok(user))
}

async fn delete(state: Data<AppState>, path: Path<PathId>) -> WebResult<WebResponse<()>> {
    AccountService::delete_user(&path.id, &state.db).await?;
    Ok(WebResponse::no_content())
}

/// File an account request
///
/// # Endpoint
/// `POST /v1/users/request` (public)
///
/// # Description
/// A newer request for the same phone replaces the pending one.
pub(super) async fn request_account(
    state: Data<AppState>,
    body: Json<NewUserRequest>,
) -> WebResult<WebResponse<UserRequestModel>> {
    let request = AccountService::request_account(body.into_inner(), &state.db).await?;
    Ok(WebResponse::created(request))
}

async fn request_page(
    state: Data<AppState>,
    params: Query<UserRequestPageParams>,
) -> WebResult<WebResponse<PageResult<UserRequestModel>>> {
    let page = AccountService::list_requests(&params.into_inner(), &state.db).await?;
    Ok(WebResponse::ok(page))
}

async fn delete_request(state: Data<AppState>, path: Path<PathId>) -> WebResult<WebResponse<()>> {
    AccountService::delete_request(&path.id, &state.db).await?;
    Ok(WebResponse::no_content())
}

/// Accept an account request
///
/// # Endpoint
/// `POST /v1/users/accept-request`
///
/// # Description
/// Creates the account from the submitted user fields and drops the request
/// named by `requestId` in the same transaction.
async fn accept_request(
    state: Data<AppState>,
    body: Json<AcceptRequest>,
) -> WebResult<WebResponse<UserModel>> {
    let user = AccountService::accept_request(body.into_inner(), &state.db).await?;
    Ok(WebResponse::created(user))
}
