mod create_skill_service;
mod delete_skill_service;
mod list_skills_service;

pub use create_skill_service::CreateSkillService;
pub use delete_skill_service::DeleteSkillService;
pub use list_skills_service::ListSkillsService;
