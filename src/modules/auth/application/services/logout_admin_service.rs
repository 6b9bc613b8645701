use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::{
    ports::{
        incoming::use_cases::{LogoutAdminError, LogoutAdminUseCase},
        outgoing::{TokenKind, TokenProvider, TokenRepository},
    },
    services::token_hasher::hash_token,
};

#[derive(Clone)]
pub struct LogoutAdminService<R>
where
    R: TokenRepository,
{
    token_repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> LogoutAdminService<R>
where
    R: TokenRepository,
{
    pub fn new(token_repository: R, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            token_repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> LogoutAdminUseCase for LogoutAdminService<R>
where
    R: TokenRepository,
{
    async fn execute(&self, refresh_token: Option<String>) -> Result<(), LogoutAdminError> {
        let Some(token) = refresh_token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
        else {
            return Ok(());
        };

        let claims = match self.token_provider.verify_token(&token) {
            Ok(claims) if claims.token_type == TokenKind::Refresh => claims,
            Ok(_) => {
                warn!("Logout called with a non-refresh token; nothing to revoke");
                return Ok(());
            }
            Err(e) => {
                warn!(error = %e, "Logout token could not be verified; nothing to revoke");
                return Ok(());
            }
        };

        // Refresh keeps accepting the token through the leeway window
        self.token_repository
            .blacklist_token(hash_token(&token), claims.sub, claims.accepted_until())
            .await
            .map_err(|e| LogoutAdminError::RepositoryError(e.to_string()))?;

        info!(admin_id = %claims.sub, "Refresh token revoked");
        Ok(())
    }
}
