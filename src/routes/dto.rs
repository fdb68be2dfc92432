//! API response DTOs for the catalog

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::models::{Media, MediaWithComments};

/// Comment as rendered inside a media detail view.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommentView {
    #[schema(example = "Great visuals")]
    pub text: String,
}

/// Single-item view: the media entry plus its full comment list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MediaDetail {
    pub id: i64,
    #[schema(example = "Top Gun")]
    pub name: String,
    #[serde(rename = "type")]
    #[schema(example = "Movie")]
    pub media_type: String,
    #[schema(example = "Netflix")]
    pub stream: String,
    pub total_comments: usize,
    pub comments: Vec<CommentView>,
}

impl From<MediaWithComments> for MediaDetail {
    fn from(detail: MediaWithComments) -> Self {
        Self {
            id: detail.media.id,
            name: detail.media.name,
            media_type: detail.media.media_type,
            stream: detail.media.stream,
            total_comments: detail.comments.len(),
            comments: detail
                .comments
                .into_iter()
                .map(|c| CommentView { text: c.text })
                .collect(),
        }
    }
}

/// List view entry: name, type and stream only — no id, no comments.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MediaSummary {
    #[schema(example = "Top Gun")]
    pub name: String,
    #[serde(rename = "type")]
    #[schema(example = "Movie")]
    pub media_type: String,
    #[schema(example = "Netflix")]
    pub stream: String,
}

impl From<Media> for MediaSummary {
    fn from(media: Media) -> Self {
        Self {
            name: media.name,
            media_type: media.media_type,
            stream: media.stream,
        }
    }
}

/// List view wrapper.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MediaList {
    pub medias: Vec<MediaSummary>,
}

impl From<Vec<Media>> for MediaList {
    fn from(medias: Vec<Media>) -> Self {
        Self {
            medias: medias.into_iter().map(MediaSummary::from).collect(),
        }
    }
}

/// Confirmation returned after a removal.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteConfirmation {
    #[schema(example = "Media removed")]
    pub message: String,
    #[schema(example = "Top Gun")]
    pub name: String,
}
