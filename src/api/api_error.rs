use crate::error::Error;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub(crate) struct APIError(anyhow::Error);

impl APIError {
    fn status(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<Error>() {
            return match err {
                Error::Unauthorized => StatusCode::UNAUTHORIZED,
                Error::NotFound { .. } => StatusCode::NOT_FOUND,
                err if err.is_validation() => StatusCode::BAD_REQUEST,
                err if err.is_upstream() => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
        }
        if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            return match rejection {
                JsonRejection::JsonDataError(_) => StatusCode::UNPROCESSABLE_ENTITY,
                JsonRejection::JsonSyntaxError(_) => StatusCode::BAD_REQUEST,
                JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
        }
        if self.0.downcast_ref::<QueryRejection>().is_some() {
            return StatusCode::BAD_REQUEST;
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for APIError {
    fn into_response(self) -> Response {
        let status = self.status();
        let any_err = self.0;
        if status.is_server_error() {
            tracing::error!("request failed: {any_err:#}");
        }
        let body = Json(json!({
            "error": format!("{any_err}"),
        }));
        (status, body).into_response()
    }
}

impl<E> From<E> for APIError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
