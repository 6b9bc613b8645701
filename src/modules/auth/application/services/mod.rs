mod fetch_session_service;
mod login_admin_service;
mod logout_admin_service;
mod refresh_token_service;
mod seed_admin_service;
pub mod token_hasher;

pub use fetch_session_service::FetchSessionService;
pub use login_admin_service::LoginAdminService;
pub use logout_admin_service::LogoutAdminService;
pub use refresh_token_service::RefreshTokenService;
pub use seed_admin_service::SeedAdminService;
