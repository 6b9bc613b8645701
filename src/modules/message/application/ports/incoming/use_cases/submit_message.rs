use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::message::application::domain::entities::Message;
use crate::shared::text::{clean, is_blank};

/// Contact form as posted by a visitor.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct MessageForm {
    #[schema(example = "Grace Hopper")]
    pub name: String,
    #[schema(example = "grace@example.com")]
    pub email: String,
    pub subject: String,
    #[schema(example = "Loved the compiler talk!")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitMessageCommandError {
    #[error("Name, email, and message are required")]
    MissingRequired,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitMessageCommand {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl SubmitMessageCommand {
    pub fn new(form: MessageForm) -> Result<Self, SubmitMessageCommandError> {
        if is_blank(&form.name) || is_blank(&form.email) || is_blank(&form.message) {
            return Err(SubmitMessageCommandError::MissingRequired);
        }

        let email = clean(&form.email);
        if !EmailAddress::is_valid(&email) {
            return Err(SubmitMessageCommandError::InvalidEmail);
        }

        Ok(Self {
            name: clean(&form.name),
            email,
            subject: clean(&form.subject),
            message: clean(&form.message),
        })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitMessageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitMessageUseCase: Send + Sync {
    async fn execute(&self, command: SubmitMessageCommand) -> Result<Message, SubmitMessageError>;
}
