//! Generated API documentation and the root redirect

use axum::response::Redirect;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Media Catalog API",
        description = "Stores media entries (name, type, streaming source) and \
                       free-text comments attached to them."
    ),
    paths(
        crate::routes::docs::home,
        crate::routes::media::create_media,
        crate::routes::media::list_medias,
        crate::routes::media::get_media,
        crate::routes::media::delete_media,
        crate::routes::media::list_media_by_type,
        crate::routes::media::list_media_by_stream,
        crate::routes::comments::create_comment,
    ),
    components(schemas(
        crate::routes::media::CreateMediaForm,
        crate::routes::comments::CreateCommentForm,
        crate::routes::dto::MediaDetail,
        crate::routes::dto::MediaSummary,
        crate::routes::dto::MediaList,
        crate::routes::dto::CommentView,
        crate::routes::dto::DeleteConfirmation,
        crate::services::error::ErrorMessage,
    )),
    tags(
        (name = "docs", description = "Interactive Swagger documentation"),
        (name = "media", description = "Adding, viewing and removing media entries"),
        (name = "comments", description = "Commenting on registered media entries")
    )
)]
pub struct ApiDoc;

/// GET / - Redirect straight to the Swagger UI
#[utoipa::path(
    get,
    path = "/",
    tag = "docs",
    responses((status = 303, description = "Redirect to the Swagger UI"))
)]
pub(crate) async fn home() -> Redirect {
    Redirect::to("/docs")
}

/// Swagger UI mounted at /docs, serving the generated document.
pub fn swagger() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}
