use crate::assets::static_routes;
use crate::routes::{health_routes, page_routes, robots_routes};
use crate::{AppState, Result, SiteTheme, WebError};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

pub use prompts_config::WebConfig;

/// Assemble the application router. Initialises the site theme.
pub fn build_router(state: AppState, config: &WebConfig) -> Router {
    SiteTheme::init();

    Router::new()
        .merge(page_routes())
        .with_state(state)
        .merge(robots_routes())
        .merge(health_routes())
        .merge(static_routes(config.static_dir.as_deref()))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
}

pub async fn start_server(config: &WebConfig) -> Result<()> {
    let app = build_router(AppState::with_client_mount(), config);

    let addr: SocketAddr = config
        .socket_addr()
        .map_err(|e| WebError::Config(format!("Invalid address: {e}")))?;

    tracing::info!("Starting web server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(WebError::Io)?;

    axum::serve(listener, app).await.map_err(WebError::Io)?;

    Ok(())
}
