//! Comment endpoint (/comment)

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Form, Json, Router};
use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::AppState;
use crate::domain;
use crate::services::error::{ApiError, ErrorMessage, LogWarn};

use super::dto::MediaDetail;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/comment", post(create_comment))
}

/// Fields accepted when commenting on a registered media entry.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentForm {
    /// Id of the media entry being commented on.
    pub media_id: i64,
    #[schema(example = "Great visuals")]
    pub text: String,
}

/// POST /comment - Append a comment to a media entry, identified by id
#[utoipa::path(
    post,
    path = "/comment",
    tag = "comments",
    request_body(
        content = CreateCommentForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Updated media entry with comments", body = MediaDetail),
        (status = 404, description = "No media with that id", body = ErrorMessage),
        (status = 400, description = "Invalid comment text", body = ErrorMessage)
    )
)]
pub(crate) async fn create_comment(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateCommentForm>,
) -> Result<Json<MediaDetail>, ApiError> {
    debug!("adding comment to media #{}", form.media_id);

    // Insert and reload inside one transaction so the returned view always
    // includes the new comment.
    let mut tx = state
        .db
        .begin()
        .await
        .warn_context("failed to begin transaction")?;
    domain::comments::add_comment(&mut *tx, form.media_id, &form.text, None)
        .await
        .warn_context("failed to add comment")?;
    let detail = domain::media::get_media_with_comments(&mut tx, form.media_id)
        .await
        .warn_context("failed to reload media")?;
    tx.commit()
        .await
        .warn_context("failed to commit comment")?;

    debug!("added comment to media #{}", form.media_id);
    Ok(Json(detail.into()))
}
