use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::blog::application::domain::entities::BlogPost;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// All posts, newest first
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "blog",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Posts", body = inline(SuccessResponse<Vec<BlogPost>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/blog")]
pub async fn list_posts_handler(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.list.execute().await {
        Ok(posts) => ApiResponse::success(posts),
        Err(e) => {
            error!("Failed to list blog posts: {}", e);
            ApiResponse::internal_error()
        }
    }
}
