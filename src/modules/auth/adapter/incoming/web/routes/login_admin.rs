use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{LoginAdminCommand, LoginAdminError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "owner@example.com")]
    pub email: String,

    #[schema(example = "correct-horse-battery")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Short-lived bearer token for admin routes
    access_token: String,

    /// Long-lived token for `/api/auth/refresh`
    refresh_token: String,

    admin: LoginAdminInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginAdminInfo {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "owner@example.com")]
    email: String,

    #[schema(example = "Jane Doe")]
    display_name: String,
}

/// Admin sign-in
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 400, description = "Missing or malformed email / password", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid email or password" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match LoginAdminCommand::new(dto.email, dto.password) {
        Ok(command) => command,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    info!(email = %command.email(), "Login attempt");

    match data.auth.login.execute(command).await {
        Ok(result) => {
            info!(admin_id = %result.admin.id, "Admin logged in");

            ApiResponse::success(LoginResponse {
                access_token: result.access_token,
                refresh_token: result.refresh_token,
                admin: LoginAdminInfo {
                    id: result.admin.id.to_string(),
                    email: result.admin.email,
                    display_name: result.admin.display_name,
                },
            })
        }

        Err(LoginAdminError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
