pub mod domain;
pub mod message_use_cases;
pub mod ports;
pub mod services;

pub use message_use_cases::MessageUseCases;
