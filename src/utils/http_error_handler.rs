use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use serde_json::json;
use std::fmt::Debug;
use tracing::{debug, error, info};

const ERROR_UNKNOWN: &str = "Unknown Error";

#[derive(Debug)]
pub enum ErrorResponse {
    InternalError(anyhow::Error),
    AppError {
        status_code: StatusCode,
        message: Option<String>,
    },
}

pub type Result<T, E = ErrorResponse> = core::result::Result<T, E>;

impl ErrorResponse {
    pub fn new_with_message(message: &str) -> Self {
        Self::AppError {
            status_code: StatusCode::BAD_REQUEST,
            message: Some(message.to_owned()),
        }
    }

    pub fn new_with_status_code(status_code: StatusCode) -> Self {
        Self::AppError {
            status_code,
            message: None,
        }
    }
}

macro_rules! match_rejection {
    ( $e: expr, $($rej: ty), +) => {
        $(
        if let Some(e) = $e.downcast_ref::<$rej>() {
            info!(e = ?e, "general bad params rejection incur");
            return into_json_response(StatusCode::BAD_REQUEST, &e.body_text());
        }
        ) +
    };
}

pub(crate) fn into_json_response(status_code: StatusCode, message: &str) -> Response {
    (
        status_code,
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        serde_json::to_string(&json!({
            "code": status_code.as_u16(),
            "message": message
        }))
        // must not be failed
        .unwrap_or("{}".to_owned()),
    )
        .into_response()
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        match self {
            Self::InternalError(e) => {
                match_rejection!(e, QueryRejection);
                if let Some(e) = e.downcast_ref::<validator::ValidationErrors>() {
                    info!(e = ?e, "paging params failed validation");
                    return into_json_response(StatusCode::BAD_REQUEST, &e.to_string());
                }
                error!(e = ?e, source_err = ?e.source(), "unprocessable error incur");
            }
            Self::AppError {
                status_code,
                message,
            } => {
                debug!(code = ?status_code, message = message, "app error is returned");
                let message = message
                    .as_deref()
                    .unwrap_or(status_code.canonical_reason().unwrap_or(ERROR_UNKNOWN));
                return into_json_response(status_code, message);
            }
        }
        into_json_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::INTERNAL_SERVER_ERROR
                .canonical_reason()
                .unwrap_or(ERROR_UNKNOWN),
        )
    }
}

impl<E> From<E> for ErrorResponse
where
    E: Into<anyhow::Error> + Debug,
{
    fn from(e: E) -> Self {
        Self::InternalError(e.into())
    }
}

pub fn new_fallback_response_handler() -> Router {
    Router::new().fallback(any(|| async {
        ErrorResponse::new_with_status_code(StatusCode::NOT_FOUND)
    }))
}
