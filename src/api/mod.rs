//! HTTP surface: a single `GET /company/{company_name}` lookup.

pub mod handlers;
pub mod types;

use axum::Router;
use axum::routing::get;
use std::sync::Arc;

use crate::ratings::RatingsStore;

/// Builds the router with the store injected as shared state.
pub fn router(store: Arc<RatingsStore>) -> Router {
    Router::new()
        .route("/company/{company_name}", get(handlers::get_company))
        .with_state(store)
}
