use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token type, expected: {0:?}")]
    InvalidTokenType(TokenKind),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Admin id
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub iss: String,
    pub token_type: TokenKind,
}

/// Clock skew tolerated when checking `exp` and `nbf`.
pub const CLOCK_LEEWAY_SECONDS: i64 = 30;

impl TokenClaims {
    /// Last instant at which `verify_token` still accepts the token.
    pub fn accepted_until(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0)
            .and_then(|exp| exp.checked_add_signed(Duration::seconds(CLOCK_LEEWAY_SECONDS)))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, admin_id: Uuid) -> Result<String, TokenError>;
    fn generate_refresh_token(&self, admin_id: Uuid) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
