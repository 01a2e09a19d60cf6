pub mod health;

use axum::{middleware::from_fn, routing::get, Router};

use crate::generate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/vapi/generate",
            get(handlers::handle_ping).post(handlers::handle_generate),
        )
        .layer(from_fn(crate::middleware::cors))
        .with_state(state)
}
