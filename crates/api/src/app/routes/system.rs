use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::app::dto::HealthResponse;

pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
}
