use actix_web::{
    body::BoxBody,
    http::{header::ContentType, StatusCode},
    HttpRequest, HttpResponse, Responder,
};
use serde::Serialize;

/// Typed REST response carrying the status code and an optional JSON payload.
#[derive(Debug)]
pub struct WebResponse<T> {
    status: StatusCode,
    data: Option<T>,
}

impl<T> WebResponse<T> {
    /// 200 with body
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            data: Some(data),
        }
    }

    /// 201 with body
    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            data: Some(data),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }
}

impl WebResponse<()> {
    /// 204 without body
    pub fn no_content() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            data: None,
        }
    }
}

impl<T> Responder for WebResponse<T>
where
    T: Serialize,
{
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        let Some(data) = self.data else {
            return HttpResponse::build(self.status).finish();
        };
        match serde_json::to_string(&data) {
            Ok(body) => HttpResponse::build(self.status)
                .content_type(ContentType::json())
                .body(body),
            Err(e) => HttpResponse::InternalServerError()
                .content_type(ContentType::json())
                .body(
                    serde_json::json!({ "statusCode": 500, "message": e.to_string() }).to_string(),
                ),
        }
    }
}
