mod create_skill;
mod delete_skill;
mod list_skills;

pub use create_skill::{
    CreateSkillCommand, CreateSkillCommandError, CreateSkillError, CreateSkillUseCase,
};
pub use delete_skill::{DeleteSkillError, DeleteSkillUseCase};
pub use list_skills::{ListSkillsError, ListSkillsUseCase};
