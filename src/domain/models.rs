//! Catalog record definitions

use chrono::{DateTime, Utc};

/// A catalogable item: movie, series, documentary and so on.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Media {
    pub id: i64,
    pub name: String,
    #[sqlx(rename = "type")]
    pub media_type: String,
    pub stream: String,
    #[allow(dead_code)] // fetched from the store but not exposed in API views
    pub created_at: DateTime<Utc>,
}

/// Free-text annotation attached to exactly one media entry.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Comment {
    #[allow(dead_code)] // fetched from the store but not exposed in API views
    pub id: i64,
    pub text: String,
    #[allow(dead_code)] // fetched from the store but not exposed in API views
    pub created_at: DateTime<Utc>,
    #[allow(dead_code)] // fetched from the store but not exposed in API views
    pub media_id: i64,
}

/// A media entry with its full comment list (domain composition).
#[derive(Debug, Clone)]
pub struct MediaWithComments {
    pub media: Media,
    pub comments: Vec<Comment>,
}
