use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::AdminProfile,
    ports::{
        incoming::use_cases::{FetchSessionError, FetchSessionUseCase},
        outgoing::AdminQuery,
    },
};

#[derive(Debug, Clone)]
pub struct FetchSessionService<Q>
where
    Q: AdminQuery,
{
    query: Q,
}

impl<Q> FetchSessionService<Q>
where
    Q: AdminQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchSessionUseCase for FetchSessionService<Q>
where
    Q: AdminQuery,
{
    async fn execute(&self, admin_id: Uuid) -> Result<AdminProfile, FetchSessionError> {
        self.query
            .find_by_id(admin_id)
            .await
            .map_err(|e| FetchSessionError::QueryError(e.to_string()))?
            .map(|admin| AdminProfile::from(&admin))
            .ok_or(FetchSessionError::AdminNotFound)
    }
}
