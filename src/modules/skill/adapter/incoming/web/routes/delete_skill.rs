use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::shared::api::ApiResponse;
use crate::skill::application::ports::incoming::use_cases::DeleteSkillError;
use crate::AppState;

/// Delete a skill
#[utoipa::path(
    delete,
    path = "/api/skills/{id}",
    tag = "skills",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Skill id")),
    responses(
        (status = 204, description = "Skill deleted"),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "Skill not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/skills/{id}")]
pub async fn delete_skill_handler(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let skill_id = path.into_inner();

    match data.skill.delete.execute(&skill_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteSkillError::SkillNotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }
        Err(DeleteSkillError::RepositoryError(msg)) => {
            error!(skill_id = %skill_id, "Failed to delete skill: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
