//! Curriculum listings.

use axum::Json;
use serde_json::{Value, json};

use somaleo_core::curriculum::{GRADES, GRADES_DESCRIPTION, SUBJECTS};

/// GET /api/subjects
pub async fn subjects() -> Json<Value> {
    Json(json!({
        "subjects": SUBJECTS,
        "count": SUBJECTS.len(),
    }))
}

/// GET /api/grades
pub async fn grades() -> Json<Value> {
    Json(json!({
        "grades": GRADES,
        "description": GRADES_DESCRIPTION,
    }))
}
