use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
};

use crate::app::dto::ThresholdQuery;
use crate::app::errors;
use crate::app::services::AppServices;

/// Classification partitions plus per-status counts.
pub async fn status(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<ThresholdQuery>,
) -> axum::response::Response {
    let thresholds = match query.parse(services.default_thresholds()) {
        Ok(t) => t,
        Err(resp) => return resp,
    };
    let bundle = match services.analyze(thresholds) {
        Ok(b) => b,
        Err(e) => return errors::load_error_to_response(e),
    };
    let classification = bundle.classification();
    let applied = thresholds.unwrap_or(services.default_thresholds());

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "thresholds": applied,
            "summary": classification.summary(),
            "critical": classification.critical(),
            "warning": classification.warning(),
            "ok": classification.ok(),
        })),
    )
        .into_response()
}

pub async fn restock(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let bundle = match services.analyze(None) {
        Ok(b) => b,
        Err(e) => return errors::load_error_to_response(e),
    };
    let plan = bundle.restock_order();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "count": plan.len(),
            "anomalies": plan.anomalies().count(),
            "total_estimated_cost": plan.total_estimated_cost(),
            "items": plan.lines(),
        })),
    )
        .into_response()
}

pub async fn categories(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.analyze(None) {
        Ok(bundle) => (StatusCode::OK, Json(bundle.category_summary().clone())).into_response(),
        Err(e) => errors::load_error_to_response(e),
    }
}
