#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Seconds
    pub access_token_expiry: i64,
    /// Seconds
    pub refresh_token_expiry: i64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be at least {} characters long for HS256", JwtConfig::MIN_SECRET_LEN)]
    SecretTooShort,

    #[error("JWT_ACCESS_EXPIRY must be between 1 and 86400 seconds, got {0}")]
    AccessExpiryOutOfRange(i64),

    #[error("JWT_REFRESH_EXPIRY must be greater than JWT_ACCESS_EXPIRY")]
    RefreshNotLongerThanAccess,
}

impl JwtConfig {
    pub const MIN_SECRET_LEN: usize = 32;

    pub fn new(
        secret_key: String,
        issuer: String,
        access_token_expiry: i64,
        refresh_token_expiry: i64,
    ) -> Result<Self, JwtConfigError> {
        if secret_key.len() < Self::MIN_SECRET_LEN {
            return Err(JwtConfigError::SecretTooShort);
        }

        if access_token_expiry <= 0 || access_token_expiry > 86_400 {
            return Err(JwtConfigError::AccessExpiryOutOfRange(access_token_expiry));
        }

        if refresh_token_expiry <= access_token_expiry {
            return Err(JwtConfigError::RefreshNotLongerThanAccess);
        }

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
            refresh_token_expiry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn accepts_sane_values() {
        let config = JwtConfig::new(SECRET.to_string(), "portfolio".to_string(), 1800, 604_800);
        assert!(config.is_ok());
    }

    #[test]
    fn rejects_short_secret() {
        let result = JwtConfig::new("short".to_string(), "portfolio".to_string(), 1800, 604_800);
        assert_eq!(result.unwrap_err(), JwtConfigError::SecretTooShort);
    }

    #[test]
    fn rejects_access_expiry_over_a_day() {
        let result = JwtConfig::new(SECRET.to_string(), "portfolio".to_string(), 90_000, 604_800);
        assert_eq!(
            result.unwrap_err(),
            JwtConfigError::AccessExpiryOutOfRange(90_000)
        );
    }

    #[test]
    fn rejects_refresh_shorter_than_access() {
        let result = JwtConfig::new(SECRET.to_string(), "portfolio".to_string(), 1800, 600);
        assert_eq!(
            result.unwrap_err(),
            JwtConfigError::RefreshNotLongerThanAccess
        );
    }
}
