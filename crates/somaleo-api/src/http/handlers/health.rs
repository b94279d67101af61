//! Liveness and service metadata.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use somaleo_core::curriculum::{GRADES, SUBJECTS, TUTOR_NAME};

use crate::state::AppState;

/// GET /health (and GET /) - Liveness, plus whether questions can be answered.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "CBC AI Tutor backend is running",
        "version": env!("CARGO_PKG_VERSION"),
        "agent_ready": state.tutor.is_ready(),
    }))
}

/// GET /api/info - Service name, version, and curriculum coverage.
pub async fn info(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": "Somaleo CBC AI Tutor",
        "version": env!("CARGO_PKG_VERSION"),
        "tutor_name": TUTOR_NAME,
        "model": state.config.upstream.model,
        "supported_subjects": SUBJECTS,
        "supported_grades": GRADES,
    }))
}
