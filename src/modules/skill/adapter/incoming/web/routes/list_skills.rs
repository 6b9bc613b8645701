use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::shared::api::ApiResponse;
use crate::skill::application::domain::entities::Skill;
use crate::AppState;

/// All skills with their ids
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Skills in creation order", body = inline(SuccessResponse<Vec<Skill>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/skills")]
pub async fn list_skills_handler(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.list.execute().await {
        Ok(skills) => ApiResponse::success(skills),
        Err(e) => {
            error!("Failed to list skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}
