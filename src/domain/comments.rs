//! Comment domain - store queries for comments
//!
//! Comments are created only as an append to an existing media entry; they
//! are never updated or deleted on their own.

use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite};

use crate::constants::MAX_COMMENT_TEXT_LEN;

use super::error::CatalogError;
use super::models::Comment;

/// Append a comment to a media entry. The foreign key guarantees the target
/// exists; a violation surfaces as [`CatalogError::NotFound`].
pub async fn add_comment<'e, E>(
    executor: E,
    media_id: i64,
    text: &str,
    created_at: Option<DateTime<Utc>>,
) -> Result<Comment, CatalogError>
where
    E: Executor<'e, Database = Sqlite>,
{
    if text.trim().is_empty() {
        return Err(CatalogError::Validation(
            "comment text cannot be empty".to_string(),
        ));
    }
    if text.chars().count() > MAX_COMMENT_TEXT_LEN {
        return Err(CatalogError::Validation(format!(
            "comment text cannot exceed {MAX_COMMENT_TEXT_LEN} characters"
        )));
    }

    let created_at = created_at.unwrap_or_else(Utc::now);

    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comment (text, created_at, media_id)
        VALUES (?, ?, ?)
        RETURNING id, text, created_at, media_id
        "#,
    )
    .bind(text)
    .bind(created_at)
    .bind(media_id)
    .fetch_one(executor)
    .await
    .map_err(|e| {
        if e.as_database_error()
            .is_some_and(|db| db.is_foreign_key_violation())
        {
            CatalogError::NotFound
        } else {
            CatalogError::Store(e)
        }
    })
}
