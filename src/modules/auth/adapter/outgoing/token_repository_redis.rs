use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{TokenRepository, TokenRepositoryError};

/// Refresh-token blacklist in Redis.
///
/// ```text
/// auth:blacklist:token:{token_hash} -> "{admin_id}"   (TTL = token expiry)
/// ```
///
/// Key existence means the token is revoked; Redis TTL handles cleanup.
#[derive(Clone)]
pub struct RedisTokenRepository {
    pool: Arc<Pool>,
}

impl RedisTokenRepository {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token_hash: &str) -> String {
        format!("auth:blacklist:token:{token_hash}")
    }

    /// `SET EX` rejects zero, so the entry lives at least one second.
    fn ttl_seconds(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
        (expires_at - now).num_seconds().max(1) as u64
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenRepositoryError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl TokenRepository for RedisTokenRepository {
    async fn blacklist_token(
        &self,
        token_hash: String,
        admin_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        let ttl = Self::ttl_seconds(expires_at, Utc::now());
        let mut conn = self.get_conn().await?;

        conn.set_ex::<_, _, ()>(Self::token_key(&token_hash), admin_id.to_string(), ttl)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))
    }

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        let mut conn = self.get_conn().await?;

        conn.exists(Self::token_key(token_hash))
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))
    }
}
