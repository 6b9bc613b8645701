use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::auth::application::{
    ports::{
        incoming::use_cases::{
            RefreshTokenCommand, RefreshTokenError, RefreshTokenResult, RefreshTokenUseCase,
        },
        outgoing::{TokenKind, TokenProvider, TokenRepository},
    },
    services::token_hasher::hash_token,
};

#[derive(Clone)]
pub struct RefreshTokenService<R>
where
    R: TokenRepository,
{
    token_repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> RefreshTokenService<R>
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
impl<R> RefreshTokenUseCase for RefreshTokenService<R>
where
    R: TokenRepository,
{
    async fn execute(
        &self,
        command: RefreshTokenCommand,
    ) -> Result<RefreshTokenResult, RefreshTokenError> {
        let claims = self.token_provider.verify_token(command.refresh_token())?;

        if claims.token_type != TokenKind::Refresh {
            warn!(admin_id = %claims.sub, "Refresh attempted with non-refresh token");
            return Err(RefreshTokenError::InvalidTokenType);
        }

        let revoked = self
            .token_repository
            .is_token_blacklisted(&hash_token(command.refresh_token()))
            .await
            .map_err(|e| RefreshTokenError::RepositoryError(e.to_string()))?;

        if revoked {
            warn!(admin_id = %claims.sub, "Refresh attempted with revoked token");
            return Err(RefreshTokenError::TokenRevoked);
        }

        let access_token = self.token_provider.generate_access_token(claims.sub)?;

        Ok(RefreshTokenResult { access_token })
    }
}
