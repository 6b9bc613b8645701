use async_trait::async_trait;

use crate::shared::text::{clean, clean_opt, is_blank};
use crate::skill::application::domain::entities::{Skill, SkillData, SkillLevel};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateSkillCommandError {
    #[error("Skill name and icon are required")]
    MissingNameOrIcon,

    #[error("Unknown skill level: {0}")]
    UnknownLevel(String),
}

#[derive(Debug, Clone)]
pub struct CreateSkillCommand {
    data: SkillData,
}

impl CreateSkillCommand {
    pub fn new(
        name: String,
        icon: String,
        level: Option<String>,
        description: Option<String>,
    ) -> Result<Self, CreateSkillCommandError> {
        if is_blank(&name) || is_blank(&icon) {
            return Err(CreateSkillCommandError::MissingNameOrIcon);
        }

        // An empty select means "no level"
        let level = match clean_opt(level) {
            Some(label) => Some(
                label
                    .parse::<SkillLevel>()
                    .map_err(|_| CreateSkillCommandError::UnknownLevel(label.clone()))?,
            ),
            None => None,
        };

        Ok(Self {
            data: SkillData {
                name: clean(&name),
                icon: clean(&icon),
                level,
                description: clean_opt(description),
            },
        })
    }

    pub fn data(&self) -> &SkillData {
        &self.data
    }

    pub fn into_data(self) -> SkillData {
        self.data
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateSkillError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(&self, command: CreateSkillCommand) -> Result<Skill, CreateSkillError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_name_and_icon() {
        let result = CreateSkillCommand::new("Rust".to_string(), "  ".to_string(), None, None);
        assert_eq!(
            result.unwrap_err(),
            CreateSkillCommandError::MissingNameOrIcon
        );
    }

    #[test]
    fn empty_level_and_description_are_dropped() {
        let command = CreateSkillCommand::new(
            " Rust ".to_string(),
            "fab fa-rust".to_string(),
            Some("".to_string()),
            Some("   ".to_string()),
        )
        .unwrap();

        assert_eq!(command.data().name, "Rust");
        assert_eq!(command.data().level, None);
        assert_eq!(command.data().description, None);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let result = CreateSkillCommand::new(
            "Rust".to_string(),
            "fab fa-rust".to_string(),
            Some("Wizard".to_string()),
            None,
        );
        assert_eq!(
            result.unwrap_err(),
            CreateSkillCommandError::UnknownLevel("Wizard".to_string())
        );
    }
}
