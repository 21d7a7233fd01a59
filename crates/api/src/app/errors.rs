use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use dromed_core::DomainError;
use dromed_infra::LoadError;

pub fn load_error_to_response(err: LoadError) -> axum::response::Response {
    tracing::error!(error = %err, "failed to load inventory snapshot");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "load_error",
        err.to_string(),
    )
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Informational body for empty lookups (`{"message": ...}`).
pub fn json_message(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(json!({ "message": message.into() }))).into_response()
}
