//! Axum router configuration with middleware.
//!
//! Middleware, outermost first: CORS, tracing, body limit.
//!
//! Unknown paths and unsupported methods both answer with the JSON error body.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{MethodRouter, get};
use tower_http::trace::TraceLayer;

use crate::http::cors::cors_middleware;
use crate::http::error::AppError;
use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.config.server.max_body_bytes;

    Router::new()
        .route("/", json_405(get(handlers::health::health)))
        .route("/health", json_405(get(handlers::health::health)))
        .route("/api/info", json_405(get(handlers::health::info)))
        .route("/api/subjects", json_405(get(handlers::curriculum::subjects)))
        .route("/api/grades", json_405(get(handlers::curriculum::grades)))
        .route(
            "/api/tutor/messages",
            json_405(get(handlers::tutor::list_messages).post(handlers::tutor::post_message)),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(cors_middleware))
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

fn json_405(routes: MethodRouter<AppState>) -> MethodRouter<AppState> {
    routes.fallback(method_not_allowed)
}
