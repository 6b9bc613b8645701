use std::{
    future::{ready, Ready},
    sync::Arc,
};

use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{TokenKind, TokenProvider};
use crate::shared::api::ApiResponse;

/// A request carrying a valid admin access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub admin_id: Uuid,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedAdmin {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(token_provider) = req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        else {
            tracing::error!("TokenProvider missing from app data");
            return ready(Err(create_api_error(ApiResponse::internal_error())));
        };

        let Some(token) = extract_token_from_header(req) else {
            return ready(Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            ))));
        };

        match token_provider.verify_token(&token) {
            Ok(claims) if claims.token_type == TokenKind::Access => {
                ready(Ok(AuthenticatedAdmin {
                    admin_id: claims.sub,
                }))
            }
            Ok(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN_TYPE",
                "Invalid token type",
            )))),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
