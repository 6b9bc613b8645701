use async_trait::async_trait;
use email_address::EmailAddress;

use crate::auth::application::domain::entities::AdminProfile;

//
// ──────────────────────────────────────────────────────────
// Login Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct LoginAdminCommand {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginAdminCommandError {
    #[error("Email address is required")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password is required")]
    EmptyPassword,
}

impl LoginAdminCommand {
    pub fn new(email: String, password: String) -> Result<Self, LoginAdminCommandError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(LoginAdminCommandError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(LoginAdminCommandError::InvalidEmailFormat);
        }

        // Passwords are compared as typed; only emptiness is checked.
        if password.trim().is_empty() {
            return Err(LoginAdminCommandError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginAdminError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub access_token: String,
    pub refresh_token: String,
    pub admin: AdminProfile,
}

#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, command: LoginAdminCommand) -> Result<LoginResult, LoginAdminError>;
}
