use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema, Default)]
pub struct LogoutRequestDto {
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out successfully")]
    message: String,
}

/// Sign out and revoke the refresh token
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    request_body = LogoutRequestDto,
    responses(
        (status = 200, description = "Logged out", body = inline(SuccessResponse<LogoutResponseBody>)),
        (status = 500, description = "Token could not be revoked", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_admin_handler(
    req: Option<web::Json<LogoutRequestDto>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.map(|r| r.into_inner()).unwrap_or_default();

    match data.auth.logout.execute(dto.refresh_token).await {
        Ok(()) => ApiResponse::success(LogoutResponseBody {
            message: "Logged out successfully".to_string(),
        }),
        Err(e) => {
            error!(error = %e, "Logout failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use crate::auth::application::ports::incoming::use_cases::{
        LogoutAdminError, LogoutAdminUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::read_json;

    #[derive(Clone, Default)]
    struct RecordingLogout {
        seen: Arc<Mutex<Vec<Option<String>>>>,
        fail: bool,
    }

    #[async_trait]
    impl LogoutAdminUseCase for RecordingLogout {
        async fn execute(&self, refresh_token: Option<String>) -> Result<(), LogoutAdminError> {
            self.seen.lock().unwrap().push(refresh_token);
            if self.fail {
                return Err(LogoutAdminError::RepositoryError("redis down".to_string()));
            }
            Ok(())
        }
    }

    #[actix_web::test]
    async fn logout_passes_token_through() {
        let logout = RecordingLogout::default();
        let state = TestAppStateBuilder::default()
            .with_logout_admin(logout.clone())
            .build();
        let app = test::init_service(App::new().app_data(state).service(logout_admin_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/logout")
            .set_json(serde_json::json!({ "refresh_token": "refresh.jwt" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let json = read_json(resp).await;
        assert_eq!(json["data"]["message"], "Logged out successfully");
        assert_eq!(
            logout.seen.lock().unwrap().as_slice(),
            &[Some("refresh.jwt".to_string())]
        );
    }

    #[actix_web::test]
    async fn logout_without_body_succeeds() {
        let logout = RecordingLogout::default();
        let state = TestAppStateBuilder::default()
            .with_logout_admin(logout.clone())
            .build();
        let app = test::init_service(App::new().app_data(state).service(logout_admin_handler)).await;

        let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(logout.seen.lock().unwrap().as_slice(), &[None]);
    }

    #[actix_web::test]
    async fn revocation_failure_is_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_logout_admin(RecordingLogout {
                fail: true,
                ..Default::default()
            })
            .build();
        let app = test::init_service(App::new().app_data(state).service(logout_admin_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/logout")
            .set_json(serde_json::json!({ "refresh_token": "refresh.jwt" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
    }
}
