pub mod domain;
pub mod ports;
pub mod project_use_cases;
pub mod services;

pub use project_use_cases::ProjectUseCases;
