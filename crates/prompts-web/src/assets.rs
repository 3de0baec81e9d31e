//! Static asset serving with conditional compilation
//!
//! - Release builds: assets embedded via rust-embed
//! - Debug builds: served from the crate's `web/public`
//! - `static_dir` in the config overrides both

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get_service,
    Router,
};
use rust_embed::Embed;
use std::path::Path;
use tower_http::services::ServeDir;

use crate::WebError;

#[derive(Embed)]
#[folder = "$CARGO_MANIFEST_DIR/web/public"]
struct Assets;

/// Create router for serving static assets
pub fn static_routes(static_dir: Option<&Path>) -> Router {
    if let Some(dir) = static_dir {
        if !dir.is_dir() {
            tracing::warn!("Static directory does not exist: {}", dir.display());
        }
        tracing::info!("Serving static assets from: {}", dir.display());
        serve_from_dir(dir)
    } else if cfg!(debug_assertions) {
        let dir = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/web/public"));
        tracing::info!("Debug mode: serving static assets from: {}", dir.display());
        serve_from_dir(dir)
    } else {
        tracing::info!("Release mode: serving embedded static assets");
        serve_embedded()
    }
}

fn serve_from_dir(dir: &Path) -> Router {
    Router::new().fallback_service(
        get_service(ServeDir::new(dir)).handle_error(|_| async { StatusCode::INTERNAL_SERVER_ERROR }),
    )
}

fn serve_embedded() -> Router {
    Router::new().fallback(embedded_handler)
}

async fn embedded_handler(req: Request<Body>) -> Response {
    let path = req.uri().path().trim_start_matches('/');

    match <Assets as Embed>::get(path) {
        Some(content) => respond_with_asset(path, content.data.into_owned()),
        None => WebError::NotFound(format!("/{path}")).into_response(),
    }
}

fn respond_with_asset(path: &str, data: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream().to_string();
    (StatusCode::OK, [(header::CONTENT_TYPE, mime)], data).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_assets_are_embedded() {
        assert!(<Assets as Embed>::get("images/background.svg").is_some());
        assert!(<Assets as Embed>::get("styles/site.css").is_some());
        assert!(<Assets as Embed>::get("client/app.js").is_some());
    }

    #[tokio::test]
    async fn embedded_handler_sets_mime() {
        let req = Request::builder()
            .uri("/styles/site.css")
            .body(Body::empty())
            .unwrap();
        let response = embedded_handler(req).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
    }

    #[tokio::test]
    async fn embedded_handler_missing_asset_is_404() {
        let req = Request::builder()
            .uri("/images/missing.png")
            .body(Body::empty())
            .unwrap();
        let response = embedded_handler(req).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
