use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{
    RefreshTokenCommand, RefreshTokenError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshTokenResponseBody {
    access_token: String,
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "New access token", body = inline(SuccessResponse<RefreshTokenResponseBody>)),
        (status = 400, description = "Empty token", body = ErrorResponse),
        (status = 401, description = "Expired, revoked or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match RefreshTokenCommand::new(req.into_inner().refresh_token) {
        Ok(command) => command,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.auth.refresh.execute(command).await {
        Ok(result) => ApiResponse::success(RefreshTokenResponseBody {
            access_token: result.access_token,
        }),

        Err(RefreshTokenError::TokenExpired) => {
            ApiResponse::unauthorized("TOKEN_EXPIRED", "Refresh token has expired")
        }

        Err(RefreshTokenError::TokenRevoked) => {
            warn!("Refresh rejected: revoked token");
            ApiResponse::unauthorized("TOKEN_REVOKED", "Refresh token has been revoked")
        }

        Err(RefreshTokenError::InvalidTokenType) => {
            ApiResponse::unauthorized("INVALID_TOKEN_TYPE", "Invalid token type")
        }

        Err(RefreshTokenError::TokenInvalid) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }

        Err(e @ RefreshTokenError::TokenGenerationFailed(_))
        | Err(e @ RefreshTokenError::RepositoryError(_)) => {
            error!(error = %e, "Token refresh failed");
            ApiResponse::internal_error()
        }
    }
}
