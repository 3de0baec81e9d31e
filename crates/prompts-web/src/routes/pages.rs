use crate::state::AppState;
use crate::views::{render_document, CategoryPage, PromptPage};
use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Router,
};
use prompts_core::{CategoryParams, RouteParams};

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/prompts/{id}", get(prompt_detail))
        .route("/categories/{category}", get(category_listing))
}

async fn prompt_detail(
    State(state): State<AppState>,
    Path(params): Path<RouteParams>,
) -> Html<String> {
    tracing::debug!(id = %params.id, "rendering prompt page");

    let body = PromptPage::new(state.prompts.as_ref()).render(params);
    Html(render_document(&PromptPage::METADATA, PromptPage::LAYOUT, body).into_string())
}

async fn category_listing(
    State(state): State<AppState>,
    Path(params): Path<CategoryParams>,
) -> Html<String> {
    tracing::debug!(category = %params.category, "rendering category page");

    let body = CategoryPage::new(state.categories.as_ref()).render(params);
    Html(render_document(&CategoryPage::METADATA, CategoryPage::LAYOUT, body).into_string())
}
