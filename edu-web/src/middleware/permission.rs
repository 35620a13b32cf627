//! Route level authorization against the [`PermRegistry`](crate::PermRegistry).

use actix_service::{Service, Transform};
use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    error::ErrorInternalServerError,
    web::Data,
    Error, HttpMessage, ResponseError,
};
use edu_error::web::WebError;
use edu_models::domain::prelude::Claims;
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

use super::auth::UNAUTHENTICATED;
use crate::AppState;

/// Permission middleware factory.
///
/// Must sit inside [`Authentication`](super::auth::Authentication) so the
/// claims are already attached when it runs.
#[derive(Clone)]
pub struct Permission;

impl<S, B> Transform<S, ServiceRequest> for Permission
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = PermissionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(PermissionMiddleware {
            service: Rc::new(RefCell::new(service)),
        })
    }
}

#[derive(Clone)]
pub struct PermissionMiddleware<S> {
    service: Rc<RefCell<S>>,
}

impl<S, B> Service<ServiceRequest> for PermissionMiddleware<S>
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
            let path = req.match_pattern().unwrap_or_default();
            let method = req.method().clone();
            let Some(claims) = req.extensions().get::<Claims>().cloned() else {
                let res = WebError::Unauthorized(UNAUTHENTICATED.into()).error_response();
                return Ok(req.into_response(res).map_into_right_body());
            };

            let state = req
                .app_data::<Data<AppState>>()
                .cloned()
                .ok_or_else(|| ErrorInternalServerError("Application state not configured"))?;

            if state.perms.check(&method, &path, &claims) {
                srv.call(req).await.map(|res| res.map_into_left_body())
            } else {
                debug!(%method, %path, user_id = %claims.user_id, "Permission denied");
                let res = WebError::Forbidden("Forbidden".into()).error_response();
                Ok(req.into_response(res).map_into_right_body())
            }
        }
        .boxed_local()
    }
}
