use async_trait::async_trait;

use crate::auth::application::ports::outgoing::TokenError;

#[derive(Debug, Clone)]
pub struct RefreshTokenCommand {
    refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RefreshTokenCommandError {
    #[error("Refresh token cannot be empty")]
    EmptyToken,
}

impl RefreshTokenCommand {
    pub fn new(refresh_token: String) -> Result<Self, RefreshTokenCommandError> {
        let refresh_token = refresh_token.trim();

        if refresh_token.is_empty() {
            return Err(RefreshTokenCommandError::EmptyToken);
        }

        Ok(Self {
            refresh_token: refresh_token.to_string(),
        })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Refresh token has expired")]
    TokenExpired,

    #[error("Invalid refresh token")]
    TokenInvalid,

    #[error("Invalid token type")]
    InvalidTokenType,

    #[error("Refresh token has been revoked")]
    TokenRevoked,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TokenError> for RefreshTokenError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired => RefreshTokenError::TokenExpired,
            TokenError::InvalidTokenType(_) => RefreshTokenError::InvalidTokenType,
            TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
            TokenError::TokenNotYetValid
            | TokenError::InvalidSignature
            | TokenError::MalformedToken => RefreshTokenError::TokenInvalid,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RefreshTokenResult {
    pub access_token: String,
}

#[async_trait]
pub trait RefreshTokenUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RefreshTokenCommand,
    ) -> Result<RefreshTokenResult, RefreshTokenError>;
}
