pub mod domain;
pub mod ports;
pub mod services;
pub mod skill_use_cases;

pub use skill_use_cases::SkillUseCases;
