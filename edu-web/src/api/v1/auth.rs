use actix_web::web::Data;
use actix_web_validator::Json;
use edu_core::AccountService;
use edu_error::WebResult;
use edu_models::{
    domain::prelude::{LoginRequest, LoginResponse},
    web::WebResponse,
};

use crate::AppState;

pub(super) const ROUTER_PREFIX: &str = "/auth";

/// Login endpoint
///
/// # Endpoint
/// `POST /v1/auth/login`
///
/// # Errors
/// - Unauthorized (401): unknown phone or wrong password
pub(super) async fn login(
    state: Data<AppState>,
    req: Json<LoginRequest>,
) -> WebResult<WebResponse<LoginResponse>> {
    let res = AccountService::login(req.into_inner(), &state.settings.web.jwt, &state.db).await?;
    Ok(WebResponse::ok(res))
}
