mod fetch_session;
mod login_admin;
mod logout_admin;
mod refresh_token;
mod seed_admin;

pub use fetch_session::{FetchSessionError, FetchSessionUseCase};
pub use login_admin::{
    LoginAdminCommand, LoginAdminCommandError, LoginAdminError, LoginAdminUseCase, LoginResult,
};
pub use logout_admin::{LogoutAdminError, LogoutAdminUseCase};
pub use refresh_token::{
    RefreshTokenCommand, RefreshTokenCommandError, RefreshTokenError, RefreshTokenResult,
    RefreshTokenUseCase,
};
pub use seed_admin::{
    SeedAdminCommand, SeedAdminCommandError, SeedAdminError, SeedAdminUseCase, SeedOutcome,
};
