use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminProfile;
use crate::auth::application::ports::incoming::use_cases::{
    FetchSessionError, FetchSessionUseCase, LoginAdminCommand, LoginAdminError,
    LoginAdminUseCase, LoginResult, LogoutAdminError, LogoutAdminUseCase, RefreshTokenCommand,
    RefreshTokenError, RefreshTokenResult, RefreshTokenUseCase,
};

// Defaults for auth use cases a test does not exercise.

pub struct StubLoginAdminUseCase;

#[async_trait]
impl LoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _command: LoginAdminCommand) -> Result<LoginResult, LoginAdminError> {
        Err(LoginAdminError::InvalidCredentials)
    }
}

pub struct StubRefreshTokenUseCase;

#[async_trait]
impl RefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _command: RefreshTokenCommand,
    ) -> Result<RefreshTokenResult, RefreshTokenError> {
        Err(RefreshTokenError::TokenInvalid)
    }
}

pub struct StubLogoutAdminUseCase;

#[async_trait]
impl LogoutAdminUseCase for StubLogoutAdminUseCase {
    async fn execute(&self, _refresh_token: Option<String>) -> Result<(), LogoutAdminError> {
        Ok(())
    }
}

pub struct StubFetchSessionUseCase;

#[async_trait]
impl FetchSessionUseCase for StubFetchSessionUseCase {
    async fn execute(&self, admin_id: Uuid) -> Result<AdminProfile, FetchSessionError> {
        Ok(AdminProfile {
            id: admin_id,
            email: "owner@example.com".to_string(),
            display_name: "Owner".to_string(),
        })
    }
}
