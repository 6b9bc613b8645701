use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedAdmin;
use crate::auth::application::ports::incoming::use_cases::FetchSessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct SessionResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,
    #[schema(example = "owner@example.com")]
    email: String,
    #[schema(example = "Jane Doe")]
    display_name: String,
}

/// Current admin session
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Signed-in admin", body = inline(SuccessResponse<SessionResponse>)),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn fetch_session_handler(
    admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.session.execute(admin.admin_id).await {
        Ok(profile) => ApiResponse::success(SessionResponse {
            id: profile.id.to_string(),
            email: profile.email,
            display_name: profile.display_name,
        }),

        // Token outlived the account
        Err(FetchSessionError::AdminNotFound) => {
            ApiResponse::unauthorized("SESSION_INVALID", "Admin account no longer exists")
        }

        Err(FetchSessionError::QueryError(msg)) => {
            error!(admin_id = %admin.admin_id, "Failed to load session: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
