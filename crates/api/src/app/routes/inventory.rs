use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
};

use dromed_inventory::{RecordFilter, filter_records, paginate, search_by_product};

use crate::app::dto::{FilterQuery, PaginationQuery, SearchQuery};
use crate::app::errors;
use crate::app::services::AppServices;

pub async fn list_all(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.snapshot() {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        Err(e) => errors::load_error_to_response(e),
    }
}

pub async fn search(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<SearchQuery>,
) -> axum::response::Response {
    let term = query.item.unwrap_or_default();
    if term.trim().is_empty() {
        return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", "No search term provided");
    }

    let snapshot = match services.snapshot() {
        Ok(s) => s,
        Err(e) => return errors::load_error_to_response(e),
    };

    match search_by_product(snapshot.records(), &term) {
        Ok(found) if found.is_empty() => {
            errors::json_message(StatusCode::NOT_FOUND, "No items found matching the search term.")
        }
        Ok(found) => (StatusCode::OK, Json(found)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn filter(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<FilterQuery>,
) -> axum::response::Response {
    let snapshot = match services.snapshot() {
        Ok(s) => s,
        Err(e) => return errors::load_error_to_response(e),
    };

    let filter = RecordFilter::from(query);
    let found = filter_records(snapshot.records(), &filter);
    if found.is_empty() {
        return errors::json_message(StatusCode::NOT_FOUND, "No items found matching the filter criteria.");
    }
    (StatusCode::OK, Json(found)).into_response()
}

pub async fn paginated(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<PaginationQuery>,
) -> axum::response::Response {
    let (page, per_page) = match query.parse() {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let snapshot = match services.snapshot() {
        Ok(s) => s,
        Err(e) => return errors::load_error_to_response(e),
    };

    match paginate(snapshot.records(), page, per_page) {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
