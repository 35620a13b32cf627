pub(crate) mod auth;
pub(crate) mod cors;
pub(crate) mod permission;

use actix_web::{dev::Payload, Error, FromRequest, HttpMessage, HttpRequest};
use edu_error::{web::WebError, WebResult};
use edu_models::domain::prelude::Claims;
use futures::future::{ready, Ready};

#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub grant: Option<Claims>,
}

impl RequestContext {
    /// Claims attached by [`auth::Authentication`].
    pub fn claims(&self) -> WebResult<&Claims> {
        self.grant
            .as_ref()
            .ok_or_else(|| WebError::Unauthorized(auth::UNAUTHENTICATED.into()))
    }
}

impl FromRequest for RequestContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(RequestContext {
            grant: req.extensions().get::<Claims>().cloned(),
        }))
    }
}
