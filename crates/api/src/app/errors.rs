use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use promo_core::FieldError;

/// External error body: `{type, message, details: [{field, message}]}`.
/// Internal error text never leaks through this shape.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ErrorDetail>>,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub field: String,
    pub message: String,
}

impl From<FieldError> for ErrorDetail {
    fn from(e: FieldError) -> Self {
        Self {
            field: e.field,
            message: e.message,
        }
    }
}

pub fn validation_error(details: Vec<FieldError>) -> axum::response::Response {
    let body = ErrorResponse {
        kind: "validation_error",
        message: "Invalid field values in promotion request".to_string(),
        details: Some(details.into_iter().map(ErrorDetail::from).collect()),
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

pub fn not_found(field: &str, value: &str) -> axum::response::Response {
    let message = format!("No promotion found for {field}: {value}");
    let body = ErrorResponse {
        kind: "not_found_error",
        message: message.clone(),
        details: Some(vec![ErrorDetail {
            field: field.to_string(),
            message,
        }]),
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

pub fn server_error() -> axum::response::Response {
    let body = ErrorResponse {
        kind: "server_error",
        message: "An unexpected error occurred".to_string(),
        details: None,
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
