use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::AdminProfile,
    ports::{
        incoming::use_cases::{LoginAdminCommand, LoginAdminError, LoginAdminUseCase, LoginResult},
        outgoing::{AdminQuery, PasswordHasher, TokenProvider},
    },
};

#[derive(Clone)]
pub struct LoginAdminService<Q>
where
    Q: AdminQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginAdminService<Q>
where
    Q: AdminQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginAdminUseCase for LoginAdminService<Q>
where
    Q: AdminQuery,
{
    async fn execute(&self, command: LoginAdminCommand) -> Result<LoginResult, LoginAdminError> {
        let admin = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| LoginAdminError::QueryError(e.to_string()))?
            .ok_or(LoginAdminError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(command.password(), &admin.password_hash)
            .await
            .map_err(|e| LoginAdminError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginAdminError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(admin.id)
            .map_err(|e| LoginAdminError::TokenGenerationFailed(e.to_string()))?;

        let refresh_token = self
            .token_provider
            .generate_refresh_token(admin.id)
            .map_err(|e| LoginAdminError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginResult {
            access_token,
            refresh_token,
            admin: AdminProfile::from(&admin),
        })
    }
}
