pub mod admin_query;
pub mod admin_repository;
pub mod password_hasher;
pub mod token_provider;
pub mod token_repository;

pub use admin_query::{AdminQuery, AdminQueryError};
pub use admin_repository::{AdminRepository, AdminRepositoryError, NewAdmin};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{CLOCK_LEEWAY_SECONDS, TokenClaims, TokenError, TokenKind, TokenProvider};
pub use token_repository::{TokenRepository, TokenRepositoryError};
