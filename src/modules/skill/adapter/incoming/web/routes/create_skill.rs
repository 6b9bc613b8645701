use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::shared::api::ApiResponse;
use crate::skill::application::domain::entities::Skill;
use crate::skill::application::ports::incoming::use_cases::CreateSkillCommand;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct CreateSkillRequestDto {
    #[schema(example = "Rust")]
    pub name: String,

    #[schema(example = "fab fa-rust")]
    pub icon: String,

    /// Beginner, Intermediate, Advanced or Expert
    #[schema(example = "Advanced")]
    pub level: Option<String>,

    pub description: Option<String>,
}

/// Add a skill
#[utoipa::path(
    post,
    path = "/api/skills",
    tag = "skills",
    security(("BearerAuth" = [])),
    request_body = CreateSkillRequestDto,
    responses(
        (status = 201, description = "Skill created", body = inline(SuccessResponse<Skill>)),
        (
            status = 400,
            description = "Missing name or icon",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "Skill name and icon are required" }
            })
        ),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/skills")]
pub async fn create_skill_handler(
    _admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
    payload: web::Json<CreateSkillRequestDto>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateSkillCommand::new(
        payload.name,
        payload.icon,
        payload.level,
        payload.description,
    ) {
        Ok(cmd) => cmd,
        Err(e) => {
            warn!("Rejected skill: {}", e);
            return ApiResponse::validation_error(&e.to_string());
        }
    };

    match data.skill.create.execute(command).await {
        Ok(skill) => ApiResponse::created(skill),
        Err(e) => {
            error!("Failed to create skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}
