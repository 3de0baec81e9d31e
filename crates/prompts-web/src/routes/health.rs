//! Health check endpoints

use crate::SiteTheme;
use axum::{http::StatusCode, routing::get, Json, Router};
use prompts_core::ThemeState;
use serde_json::{json, Value};

pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "prompts-web"
    }))
}

async fn ready_check() -> (StatusCode, Json<Value>) {
    let theme = SiteTheme::current();
    let (status, label) = if theme == ThemeState::Dark {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
    };

    (
        status,
        Json(json!({
            "status": label,
            "theme": theme,
        })),
    )
}
