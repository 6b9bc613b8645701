use std::sync::Arc;

use actix_web::{body::MessageBody, dev::ServiceResponse, test, web};
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::{
    TokenClaims, TokenError, TokenKind, TokenProvider,
};

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: "test_secret_key_for_portfolio_tests_only".to_string(),
        issuer: "portfolio-test".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
    }
}

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(test_jwt_config())
}

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}

pub async fn read_json<B: MessageBody>(resp: ServiceResponse<B>) -> serde_json::Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap()
}

/// Accepts any bearer token as the configured admin, or rejects everything.
#[derive(Clone)]
pub struct StubTokenProvider {
    claims: Option<TokenClaims>,
}

impl StubTokenProvider {
    fn with_kind(admin_id: Uuid, token_type: TokenKind) -> Self {
        Self {
            claims: Some(TokenClaims {
                sub: admin_id,
                exp: 9_999_999_999,
                iat: 0,
                nbf: 0,
                iss: "portfolio-test".to_string(),
                token_type,
            }),
        }
    }

    pub fn access(admin_id: Uuid) -> Self {
        Self::with_kind(admin_id, TokenKind::Access)
    }

    pub fn refresh(admin_id: Uuid) -> Self {
        Self::with_kind(admin_id, TokenKind::Refresh)
    }

    pub fn rejecting() -> Self {
        Self { claims: None }
    }

    pub fn into_data(self) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(self);
        web::Data::new(provider)
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _admin_id: Uuid) -> Result<String, TokenError> {
        unimplemented!("Not used by route tests")
    }

    fn generate_refresh_token(&self, _admin_id: Uuid) -> Result<String, TokenError> {
        unimplemented!("Not used by route tests")
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        self.claims.clone().ok_or(TokenError::InvalidSignature)
    }
}
