use actix_web::{put, web, Responder};
use tracing::error;

use super::{map_command_error, post_not_found};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::blog::application::domain::entities::BlogPost;
use crate::blog::application::ports::incoming::use_cases::{
    BlogPostForm, PublishPostCommand, UpdatePostError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Rewrite a post, keeping its publish date
#[utoipa::path(
    put,
    path = "/api/blog/{id}",
    tag = "blog",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Post id")),
    request_body = BlogPostForm,
    responses(
        (status = 200, description = "Post replaced", body = inline(SuccessResponse<BlogPost>)),
        (status = 400, description = "Missing title or content", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Blog post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/blog/{id}")]
pub async fn update_post_handler(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<BlogPostForm>,
) -> impl Responder {
    let post_id = path.into_inner();

    let command = match PublishPostCommand::new(payload.into_inner()) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.blog.update.execute(&post_id, command).await {
        Ok(post) => ApiResponse::success(post),
        Err(UpdatePostError::PostNotFound) => post_not_found(),
        Err(UpdatePostError::RepositoryError(msg)) => {
            error!(post_id = %post_id, "Failed to update blog post: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
