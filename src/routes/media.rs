//! Media endpoints (/media, /medias, /media-by-type, /media-by-stream)

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use tracing::{debug, warn};
use utoipa::{IntoParams, ToSchema};

use crate::AppState;
use crate::domain;
use crate::domain::error::CatalogError;
use crate::domain::models::MediaWithComments;
use crate::services::error::{ApiError, ErrorMessage, LogWarn};

use super::dto::{DeleteConfirmation, MediaDetail, MediaList};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/media",
            post(create_media).get(get_media).delete(delete_media),
        )
        .route("/medias", get(list_medias))
        .route("/media-by-type", get(list_media_by_type))
        .route("/media-by-stream", get(list_media_by_stream))
}

/// Fields accepted when registering a new media entry. The examples are
/// documentation hints only, nothing is enforced beyond presence.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMediaForm {
    #[schema(example = "Top Gun")]
    pub name: String,
    #[serde(rename = "type")]
    #[schema(example = "Movie, Series, Documentary or Other")]
    pub media_type: String,
    #[schema(example = "Netflix, Prime Video, Disney+ or Other")]
    pub stream: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameQuery {
    /// Name of the media entry.
    pub name: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TypeQuery {
    /// Media type to filter on.
    #[serde(rename = "type")]
    pub media_type: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StreamQuery {
    /// Streaming source to filter on.
    pub stream: String,
}

/// POST /media - Register a new media entry
#[utoipa::path(
    post,
    path = "/media",
    tag = "media",
    request_body(
        content = CreateMediaForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Media created", body = MediaDetail),
        (status = 409, description = "Name already in use", body = ErrorMessage),
        (status = 400, description = "Invalid input or store failure", body = ErrorMessage)
    )
)]
pub(crate) async fn create_media(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateMediaForm>,
) -> Result<Json<MediaDetail>, ApiError> {
    debug!("adding media '{}'", form.name);

    if form.name.trim().is_empty() {
        return Err(CatalogError::Validation("media name cannot be empty".to_string()).into());
    }

    let mut tx = state
        .db
        .begin()
        .await
        .warn_context("failed to begin transaction")?;
    let media = domain::media::create_media(&mut *tx, &form.name, &form.media_type, &form.stream, None)
        .await
        .warn_context("failed to add media")?;
    tx.commit()
        .await
        .warn_context("failed to commit new media")?;

    debug!("added media '{}' with id {}", media.name, media.id);
    Ok(Json(
        MediaWithComments {
            media,
            comments: Vec::new(),
        }
        .into(),
    ))
}

/// GET /medias - List every registered media entry
#[utoipa::path(
    get,
    path = "/medias",
    tag = "media",
    responses(
        (status = 200, description = "All media entries, possibly empty", body = MediaList),
        (status = 400, description = "Store failure", body = ErrorMessage)
    )
)]
pub(crate) async fn list_medias(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MediaList>, ApiError> {
    debug!("collecting all media");

    let medias = domain::media::list_media(&state.db)
        .await
        .warn_context("failed to list media")?;

    debug!("{} media entries found", medias.len());
    Ok(Json(medias.into()))
}

/// GET /media - Fetch one media entry by name, with its comments
#[utoipa::path(
    get,
    path = "/media",
    tag = "media",
    params(NameQuery),
    responses(
        (status = 200, description = "Media entry with comments", body = MediaDetail),
        (status = 404, description = "No media with that name", body = ErrorMessage)
    )
)]
pub(crate) async fn get_media(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NameQuery>,
) -> Result<Json<MediaDetail>, ApiError> {
    debug!("collecting media '{}'", query.name);

    let mut conn = state
        .db
        .acquire()
        .await
        .warn_context("failed to acquire connection")?;
    let detail = domain::media::get_media_with_comments_by_name(&mut conn, &query.name)
        .await
        .warn_context("failed to fetch media")?;

    Ok(Json(detail.into()))
}

/// DELETE /media - Remove a media entry by name
#[utoipa::path(
    delete,
    path = "/media",
    tag = "media",
    params(NameQuery),
    responses(
        (status = 200, description = "Removal confirmation", body = DeleteConfirmation),
        (status = 404, description = "No media with that name", body = ErrorMessage)
    )
)]
pub(crate) async fn delete_media(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NameQuery>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    debug!("removing media '{}'", query.name);

    let mut tx = state
        .db
        .begin()
        .await
        .warn_context("failed to begin transaction")?;
    let removed = domain::media::delete_media_by_name(&mut *tx, &query.name)
        .await
        .warn_context("failed to remove media")?;
    tx.commit()
        .await
        .warn_context("failed to commit removal")?;

    if removed == 0 {
        warn!("media '{}' not found for removal", query.name);
        return Err(CatalogError::NotFound.into());
    }

    debug!("removed media '{}'", query.name);
    Ok(Json(DeleteConfirmation {
        message: "Media removed".to_string(),
        name: query.name,
    }))
}

/// GET /media-by-type - List media entries of one type
#[utoipa::path(
    get,
    path = "/media-by-type",
    tag = "media",
    params(TypeQuery),
    responses(
        (status = 200, description = "Matching media entries", body = MediaList),
        (status = 404, description = "No media of that type", body = ErrorMessage)
    )
)]
pub(crate) async fn list_media_by_type(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TypeQuery>,
) -> Result<Json<MediaList>, ApiError> {
    debug!("collecting media with type '{}'", query.media_type);

    let medias = domain::media::list_media_by_type(&state.db, &query.media_type)
        .await
        .warn_context("failed to filter media by type")?;

    // An empty filter result is a not-found, unlike the list-all endpoint.
    if medias.is_empty() {
        warn!("no media with type '{}'", query.media_type);
        return Err(CatalogError::NotFound.into());
    }

    debug!("{} media entries found", medias.len());
    Ok(Json(medias.into()))
}

/// GET /media-by-stream - List media entries on one streaming source
#[utoipa::path(
    get,
    path = "/media-by-stream",
    tag = "media",
    params(StreamQuery),
    responses(
        (status = 200, description = "Matching media entries", body = MediaList),
        (status = 404, description = "No media on that stream", body = ErrorMessage)
    )
)]
pub(crate) async fn list_media_by_stream(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StreamQuery>,
) -> Result<Json<MediaList>, ApiError> {
    debug!("collecting media on stream '{}'", query.stream);

    let medias = domain::media::list_media_by_stream(&state.db, &query.stream)
        .await
        .warn_context("failed to filter media by stream")?;

    if medias.is_empty() {
        warn!("no media on stream '{}'", query.stream);
        return Err(CatalogError::NotFound.into());
    }

    debug!("{} media entries found", medias.len());
    Ok(Json(medias.into()))
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::routes::testing::test_app;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("parse json body")
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("build request")
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("build request")
    }

    fn delete_req(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .expect("build request")
    }

    #[tokio::test]
    async fn create_media_returns_detail_with_no_comments() {
        let app = test_app().await;

        let response = app
            .oneshot(post_form("/media", "name=Dune&type=Movie&stream=Max"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert!(body["id"].is_i64());
        assert_eq!(body["name"], "Dune");
        assert_eq!(body["type"], "Movie");
        assert_eq!(body["stream"], "Max");
        assert_eq!(body["total_comments"], 0);
        assert_eq!(body["comments"], json!([]));
    }

    #[tokio::test]
    async fn duplicate_name_conflicts_and_keeps_one_row() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(post_form("/media", "name=Dune&type=Movie&stream=Max"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(post_form("/media", "name=Dune&type=Series&stream=Netflix"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Media with same name already exists.");

        let response = app.oneshot(get_req("/medias")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["medias"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn blank_name_is_a_bad_request() {
        let app = test_app().await;

        let response = app
            .oneshot(post_form("/media", "name=++&type=Movie&stream=Max"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn listing_with_no_rows_returns_empty_list() {
        let app = test_app().await;

        let response = app.oneshot(get_req("/medias")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "medias": [] }));
    }

    #[tokio::test]
    async fn list_view_omits_id_and_comments() {
        let app = test_app().await;

        app.clone()
            .oneshot(post_form("/media", "name=Dune&type=Movie&stream=Max"))
            .await
            .unwrap();

        let response = app.oneshot(get_req("/medias")).await.unwrap();
        let body = body_json(response).await;
        let entry = &body["medias"][0];
        assert_eq!(entry["name"], "Dune");
        assert_eq!(entry["type"], "Movie");
        assert_eq!(entry["stream"], "Max");
        assert!(entry.get("id").is_none());
        assert!(entry.get("comments").is_none());
    }

    #[tokio::test]
    async fn fetch_by_unknown_name_is_not_found() {
        let app = test_app().await;

        let response = app.oneshot(get_req("/media?name=Nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Media not found");
    }

    #[tokio::test]
    async fn delete_confirms_then_reports_not_found() {
        let app = test_app().await;

        app.clone()
            .oneshot(post_form("/media", "name=Dune&type=Movie&stream=Max"))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(delete_req("/media?name=Dune"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Media removed", "name": "Dune" })
        );

        // Gone now, both for delete and fetch.
        let response = app
            .clone()
            .oneshot(delete_req("/media?name=Dune"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app.oneshot(get_req("/media?name=Dune")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn filters_return_matches_or_not_found() {
        let app = test_app().await;

        app.clone()
            .oneshot(post_form("/media", "name=Dune&type=Movie&stream=Max"))
            .await
            .unwrap();
        app.clone()
            .oneshot(post_form(
                "/media",
                "name=Severance&type=Series&stream=Apple+TV",
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(get_req("/media-by-type?type=Movie"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["medias"].as_array().unwrap().len(), 1);
        assert_eq!(body["medias"][0]["name"], "Dune");

        let response = app
            .clone()
            .oneshot(get_req("/media-by-stream?stream=Apple+TV"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["medias"][0]["name"], "Severance");

        // Empty filter results are a 404, unlike the list-all endpoint.
        let response = app
            .clone()
            .oneshot(get_req("/media-by-type?type=Documentary"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(get_req("/media-by-stream?stream=Hulu"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn root_redirects_to_documentation() {
        let app = test_app().await;

        let response = app.oneshot(get_req("/")).await.unwrap();
        assert!(response.status().is_redirection());
        assert_eq!(response.headers()[header::LOCATION], "/docs");
    }
}
