use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminProfile;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchSessionError {
    #[error("Admin not found")]
    AdminNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait FetchSessionUseCase: Send + Sync {
    async fn execute(&self, admin_id: Uuid) -> Result<AdminProfile, FetchSessionError>;
}
