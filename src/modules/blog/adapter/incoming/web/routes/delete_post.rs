use actix_web::{delete, web, Responder};
use tracing::error;

use super::post_not_found;
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::blog::application::ports::incoming::use_cases::DeletePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a post
#[utoipa::path(
    delete,
    path = "/api/blog/{id}",
    tag = "blog",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Blog post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/blog/{id}")]
pub async fn delete_post_handler(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.blog.delete.execute(&post_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeletePostError::PostNotFound) => post_not_found(),
        Err(DeletePostError::RepositoryError(msg)) => {
            error!(post_id = %post_id, "Failed to delete blog post: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
