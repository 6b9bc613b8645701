use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    FetchSessionUseCase, LoginAdminUseCase, LogoutAdminUseCase, RefreshTokenUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginAdminUseCase + Send + Sync>,
    pub refresh: Arc<dyn RefreshTokenUseCase + Send + Sync>,
    pub logout: Arc<dyn LogoutAdminUseCase + Send + Sync>,
    pub session: Arc<dyn FetchSessionUseCase + Send + Sync>,
}
