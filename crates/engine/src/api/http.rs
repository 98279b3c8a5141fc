//! HTTP routes.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use storyshelf_domain::{Slug, Story};

use crate::app::App;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/stories", get(list_stories))
        .route("/api/stories/{slug}", get(get_story))
        .route("/api/virtues/{virtue}/stories", get(list_stories_by_virtue))
}

async fn health() -> &'static str {
    "OK"
}

async fn list_stories(State(app): State<Arc<App>>) -> Json<Vec<Story>> {
    Json(app.use_cases.stories.list.execute().await)
}

async fn get_story(
    State(app): State<Arc<App>>,
    Path(slug): Path<String>,
) -> Result<Json<Story>, ApiError> {
    let slug = Slug::parse(slug).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let story = app
        .use_cases
        .stories
        .get_by_slug
        .execute(slug.as_str())
        .await
        .ok_or(ApiError::NotFound)?;
    Ok(Json(story))
}

async fn list_stories_by_virtue(
    State(app): State<Arc<App>>,
    Path(virtue): Path<String>,
) -> Json<Vec<Story>> {
    Json(app.use_cases.stories.list_by_virtue.execute(&virtue).await)
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => {
                (axum::http::StatusCode::NOT_FOUND, "Not found").into_response()
            }
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
        }
    }
}
