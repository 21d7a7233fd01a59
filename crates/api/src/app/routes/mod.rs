use axum::{Router, routing::get};

pub mod analysis;
pub mod inventory;
pub mod system;

/// Router for everything under `/api/inventory`.
pub fn router() -> Router {
    Router::new()
        .route("/", get(inventory::list_all))
        .route("/search", get(inventory::search))
        .route("/filter", get(inventory::filter))
        .route("/paginated", get(inventory::paginated))
        .route("/status", get(analysis::status))
        .route("/restock", get(analysis::restock))
        .route("/categories", get(analysis::categories))
}
