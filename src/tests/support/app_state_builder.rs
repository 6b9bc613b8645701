use std::sync::Arc;

use actix_web::web;

use crate::auth::application::ports::incoming::use_cases::{
    FetchSessionUseCase, LoginAdminUseCase, LogoutAdminUseCase, RefreshTokenUseCase,
};
use crate::auth::application::AuthUseCases;
use crate::site::application::SiteSettings;
use crate::store::application::ports::outgoing::DocumentStore;
use crate::tests::support::in_memory_store::InMemoryDocumentStore;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds `AppState` with every content module wired to one store.
///
/// Auth defaults to stubs; content modules run their real services.
pub struct TestAppStateBuilder {
    store: Arc<dyn DocumentStore>,
    login: Arc<dyn LoginAdminUseCase + Send + Sync>,
    refresh: Arc<dyn RefreshTokenUseCase + Send + Sync>,
    logout: Arc<dyn LogoutAdminUseCase + Send + Sync>,
    session: Arc<dyn FetchSessionUseCase + Send + Sync>,
    site: SiteSettings,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            store: Arc::new(InMemoryDocumentStore::new()),
            login: Arc::new(StubLoginAdminUseCase),
            refresh: Arc::new(StubRefreshTokenUseCase),
            logout: Arc::new(StubLogoutAdminUseCase),
            session: Arc::new(StubFetchSessionUseCase),
            site: SiteSettings::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_login_admin(mut self, uc: impl LoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.login = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl RefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.refresh = Arc::new(uc);
        self
    }

    pub fn with_logout_admin(
        mut self,
        uc: impl LogoutAdminUseCase + Send + Sync + 'static,
    ) -> Self {
        self.logout = Arc::new(uc);
        self
    }

    pub fn with_fetch_session(
        mut self,
        uc: impl FetchSessionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.session = Arc::new(uc);
        self
    }

    pub fn with_site_title(mut self, title: &str) -> Self {
        self.site = SiteSettings::new(title);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let auth = AuthUseCases {
            login: self.login,
            refresh: self.refresh,
            logout: self.logout,
            session: self.session,
        };
        web::Data::new(AppState::new(auth, self.store, self.site))
    }
}
