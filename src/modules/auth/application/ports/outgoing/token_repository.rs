use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Revoked refresh tokens, keyed by token hash.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Entries disappear on their own once `expires_at` has passed. An
    /// `expires_at` in the past still records the token briefly.
    async fn blacklist_token(
        &self,
        token_hash: String,
        admin_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError>;

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError>;
}
