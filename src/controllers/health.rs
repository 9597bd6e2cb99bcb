use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::script::ScriptService;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Ready as soon as the process is up; reports whether requests must bring their own key
pub async fn health_ready(State(script_service): State<Arc<ScriptService>>) -> impl IntoResponse {
    let credentials = if script_service.has_default_credentials() {
        "configured"
    } else {
        "per_request"
    };

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "provider": script_service.provider(),
            "credentials": credentials
        })),
    )
}
