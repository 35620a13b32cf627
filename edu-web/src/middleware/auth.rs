//! Bearer token authentication.
//!
//! Validates the access token of every request entering the protected scope
//! and attaches the decoded [`Claims`] to the request extensions.

use actix_service::{Service, Transform};
use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    error::ErrorInternalServerError,
    http::{header::AUTHORIZATION, Method},
    web::Data,
    Error, HttpMessage, ResponseError,
};
use edu_error::web::WebError;
use edu_models::{constants::BEARER_TOKEN, domain::prelude::Claims};
use edu_utils::jwt::{decode_jwt, issuer_validation};
use futures::{
    future::{ok, LocalBoxFuture, Ready},
    FutureExt,
};
use std::{
    cell::RefCell,
    rc::Rc,
    task::{Context, Poll},
};
use tracing::debug;

use crate::AppState;

pub(crate) const UNAUTHENTICATED: &str = "Please authenticate";

/// Authentication middleware factory.
pub struct Authentication;

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthenticationMiddleware {
            service: Rc::new(RefCell::new(service)),
        })
    }
}

/// Rejects requests without a valid bearer token with `401 Please authenticate`.
pub struct AuthenticationMiddleware<S> {
    service: Rc<RefCell<S>>,
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = S::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        async move {
            // Fast path for OPTIONS requests
            if Method::OPTIONS == req.method() {
                return srv.call(req).await.map(|res| res.map_into_left_body());
            }

            let state = req
                .app_data::<Data<AppState>>()
                .cloned()
                .ok_or_else(|| ErrorInternalServerError("Application state not configured"))?;
            let jwt = &state.settings.web.jwt;

            let claims = extract_bearer_token(&req).and_then(|token| {
                decode_jwt::<Claims>(
                    token,
                    jwt.secret.as_bytes(),
                    Some(issuer_validation(&jwt.issuer)),
                )
                .map_err(|e| debug!(error = %e, "Rejected access token"))
                .ok()
            });

            let Some(token_data) = claims else {
                let res = WebError::Unauthorized(UNAUTHENTICATED.into()).error_response();
                return Ok(req.into_response(res).map_into_right_body());
            };

            req.extensions_mut().insert(token_data.claims);

            srv.call(req).await.map(|res| res.map_into_left_body())
        }
        .boxed_local()
    }
}

/// Extracts the bearer token from the `Authorization` header.
#[inline]
fn extract_bearer_token(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_TOKEN)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
