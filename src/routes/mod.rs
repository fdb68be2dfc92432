pub mod comments;
pub mod docs;
pub mod dto;
pub mod media;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::AppState;

/// Build all routes for the API.
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(docs::home))
        .merge(media::routes())
        .merge(comments::routes())
        .merge(docs::swagger())
}
