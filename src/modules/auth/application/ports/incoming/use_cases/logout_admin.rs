use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LogoutAdminError {
    #[error("Token revocation failed: {0}")]
    RepositoryError(String),
}

/// Revokes the given refresh token when it is still valid.
/// A missing or unusable token is not an error.
#[async_trait]
pub trait LogoutAdminUseCase: Send + Sync {
    async fn execute(&self, refresh_token: Option<String>) -> Result<(), LogoutAdminError>;
}
