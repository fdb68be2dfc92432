//! Media domain - store queries for media entries
//!
//! Single-statement functions use the generic Executor pattern so they work
//! with both `&SqlitePool` and `&mut SqliteConnection` (transactions). The
//! detail loaders issue two statements and therefore take a connection.

use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite, SqliteConnection};

use super::error::CatalogError;
use super::models::{Comment, Media, MediaWithComments};

/// Insert a new media row. `created_at` falls back to the insertion time.
pub async fn create_media<'e, E>(
    executor: E,
    name: &str,
    media_type: &str,
    stream: &str,
    created_at: Option<DateTime<Utc>>,
) -> Result<Media, CatalogError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let created_at = created_at.unwrap_or_else(Utc::now);

    sqlx::query_as::<_, Media>(
        r#"
        INSERT INTO media (name, type, stream, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, name, type, stream, created_at
        "#,
    )
    .bind(name)
    .bind(media_type)
    .bind(stream)
    .bind(created_at)
    .fetch_one(executor)
    .await
    .map_err(|e| {
        if e.as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            CatalogError::DuplicateName
        } else {
            CatalogError::Store(e)
        }
    })
}

/// List every media entry in insertion order.
pub async fn list_media<'e, E>(executor: E) -> Result<Vec<Media>, CatalogError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let medias = sqlx::query_as::<_, Media>(
        "SELECT id, name, type, stream, created_at FROM media ORDER BY id",
    )
    .fetch_all(executor)
    .await?;

    Ok(medias)
}

/// List media entries matching a type (possibly empty).
pub async fn list_media_by_type<'e, E>(
    executor: E,
    media_type: &str,
) -> Result<Vec<Media>, CatalogError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let medias = sqlx::query_as::<_, Media>(
        "SELECT id, name, type, stream, created_at FROM media WHERE type = ? ORDER BY id",
    )
    .bind(media_type)
    .fetch_all(executor)
    .await?;

    Ok(medias)
}

/// List media entries matching a streaming source (possibly empty).
pub async fn list_media_by_stream<'e, E>(
    executor: E,
    stream: &str,
) -> Result<Vec<Media>, CatalogError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let medias = sqlx::query_as::<_, Media>(
        "SELECT id, name, type, stream, created_at FROM media WHERE stream = ? ORDER BY id",
    )
    .bind(stream)
    .fetch_all(executor)
    .await?;

    Ok(medias)
}

/// Load a media entry and its comments by id.
pub async fn get_media_with_comments(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<MediaWithComments, CatalogError> {
    let media = sqlx::query_as::<_, Media>(
        "SELECT id, name, type, stream, created_at FROM media WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(CatalogError::NotFound)?;

    load_comments(conn, media).await
}

/// Load a media entry and its comments by its unique name.
pub async fn get_media_with_comments_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<MediaWithComments, CatalogError> {
    let media = sqlx::query_as::<_, Media>(
        "SELECT id, name, type, stream, created_at FROM media WHERE name = ?",
    )
    .bind(name)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(CatalogError::NotFound)?;

    load_comments(conn, media).await
}

/// Delete a media entry by name. Returns the number of rows removed (0 or 1).
pub async fn delete_media_by_name<'e, E>(executor: E, name: &str) -> Result<u64, CatalogError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM media WHERE name = ?")
        .bind(name)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}

// Comments are reconstructed with an explicit query by foreign key, in
// insertion order.
async fn load_comments(
    conn: &mut SqliteConnection,
    media: Media,
) -> Result<MediaWithComments, CatalogError> {
    let comments = sqlx::query_as::<_, Comment>(
        "SELECT id, text, created_at, media_id FROM comment WHERE media_id = ? ORDER BY id",
    )
    .bind(media.id)
    .fetch_all(conn)
    .await?;

    Ok(MediaWithComments { media, comments })
}
