use async_trait::async_trait;

use crate::auth::application::domain::entities::Admin;

#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminRepositoryError {
    #[error("Admin already exists")]
    AdminAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn create_admin(&self, admin: NewAdmin) -> Result<Admin, AdminRepositoryError>;
}
