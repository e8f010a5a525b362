pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod validation;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use services::SchoolStore;

/// Build the application router over a connected (or lazily connecting)
/// store.
pub fn app(store: SchoolStore) -> Router {
    Router::new()
        .route("/addSchool", post(handlers::add_school))
        .route("/listSchools", get(handlers::list_schools))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}
