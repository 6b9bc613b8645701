use async_trait::async_trait;
use email_address::EmailAddress;

use crate::auth::application::domain::entities::AdminProfile;

#[derive(Debug, Clone)]
pub struct SeedAdminCommand {
    email: String,
    password: String,
    display_name: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeedAdminCommandError {
    #[error("Invalid admin email: {0}")]
    InvalidEmail(String),

    #[error("Admin password must be at least 8 characters")]
    PasswordTooShort,
}

impl SeedAdminCommand {
    pub const MIN_PASSWORD_LEN: usize = 8;

    pub fn new(
        email: String,
        password: String,
        display_name: Option<String>,
    ) -> Result<Self, SeedAdminCommandError> {
        let email = email.trim().to_lowercase();

        if !EmailAddress::is_valid(&email) {
            return Err(SeedAdminCommandError::InvalidEmail(email));
        }

        if password.chars().count() < Self::MIN_PASSWORD_LEN {
            return Err(SeedAdminCommandError::PasswordTooShort);
        }

        let display_name = display_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Admin".to_string());

        Ok(Self {
            email,
            password,
            display_name,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    Created(AdminProfile),
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeedAdminError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Creates the dashboard account on startup. Running it again is a no-op.
#[async_trait]
pub trait SeedAdminUseCase: Send + Sync {
    async fn execute(&self, command: SeedAdminCommand) -> Result<SeedOutcome, SeedAdminError>;
}
