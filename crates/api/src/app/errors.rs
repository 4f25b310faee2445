use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use catalog_core::DomainError;

use crate::app::dto::ErrorResponse;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let (status, message) = match &err {
        DomainError::Decode(_) => (StatusCode::BAD_REQUEST, "could not decode product payload"),
        DomainError::MissingOrInvalidField => {
            (StatusCode::BAD_REQUEST, "required fields are missing or invalid")
        }
        DomainError::InvalidDate(_) => (StatusCode::BAD_REQUEST, "invalid expiration date"),
        DomainError::DuplicateCode(_) => (StatusCode::BAD_REQUEST, "code value already exists"),
        DomainError::InvalidId(_) => (StatusCode::BAD_REQUEST, "invalid product id"),
        DomainError::NotFound => (StatusCode::NOT_FOUND, "product not found"),
    };

    tracing::warn!(code = err.code(), status = status.as_u16(), "request rejected: {err}");
    json_error(status, err.code(), message)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            code: code.to_string(),
        }),
    )
        .into_response()
}
