mod fetch_session;
mod login_admin;
mod logout_admin;
mod refresh_token;

pub use fetch_session::{__path_fetch_session_handler, fetch_session_handler, SessionResponse};
pub use login_admin::{
    __path_login_admin_handler, login_admin_handler, LoginAdminInfo, LoginRequestDto,
    LoginResponse,
};
pub use logout_admin::{
    __path_logout_admin_handler, logout_admin_handler, LogoutRequestDto, LogoutResponseBody,
};
pub use refresh_token::{
    __path_refresh_token_handler, refresh_token_handler, RefreshTokenRequestDto,
    RefreshTokenResponseBody,
};
