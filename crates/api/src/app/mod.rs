//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: snapshot source + analysis wiring shared by handlers
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: query-string DTOs and parsing helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use dromed_infra::SnapshotSource;
use dromed_inventory::ReportAssembler;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(source: Arc<dyn SnapshotSource>, assembler: ReportAssembler) -> Router {
    let services = Arc::new(services::AppServices::new(source, assembler));

    Router::new()
        .route("/", get(routes::system::home))
        .route("/health", get(routes::system::health))
        .nest("/api/inventory", routes::router())
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
