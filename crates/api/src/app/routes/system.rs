use axum::{Json, http::StatusCode, response::IntoResponse};

pub async fn home() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "message": "Welcome to the DroMed Inventory API!" })),
    )
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
