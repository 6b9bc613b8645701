mod create_skill;
mod delete_skill;
mod list_skills;

pub use create_skill::{__path_create_skill_handler, create_skill_handler, CreateSkillRequestDto};
pub use delete_skill::{__path_delete_skill_handler, delete_skill_handler};
pub use list_skills::{__path_list_skills_handler, list_skills_handler};
