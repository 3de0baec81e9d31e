//! Crawl policy endpoint

use axum::{http::header, response::IntoResponse, routing::get, Router};
use prompts_core::get_crawl_policy;

pub fn robots_routes() -> Router {
    Router::new().route("/robots.txt", get(robots_txt))
}

async fn robots_txt() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        get_crawl_policy().to_robots_txt(),
    )
}
