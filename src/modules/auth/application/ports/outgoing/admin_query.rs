use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Admin;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AdminQuery: Send + Sync {
    async fn find_by_id(&self, admin_id: Uuid) -> Result<Option<Admin>, AdminQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AdminQueryError>;
}
