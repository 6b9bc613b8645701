use actix_web::{get, web, Responder};
use tracing::error;

use super::post_not_found;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::blog::application::domain::entities::BlogPost;
use crate::blog::application::ports::incoming::use_cases::GetPostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// A single post, for the edit form
#[utoipa::path(
    get,
    path = "/api/blog/{id}",
    tag = "blog",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post", body = inline(SuccessResponse<BlogPost>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Blog post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/blog/{id}")]
pub async fn get_post_handler(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.blog.get.execute(&post_id).await {
        Ok(post) => ApiResponse::success(post),
        Err(GetPostError::PostNotFound) => post_not_found(),
        Err(GetPostError::RepositoryError(msg)) => {
            error!(post_id = %post_id, "Failed to load blog post: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
