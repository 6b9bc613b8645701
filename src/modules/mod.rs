pub mod auth;
pub mod blog;
pub mod message;
pub mod project;
pub mod section;
pub mod site;
pub mod skill;
pub mod store;
pub mod timeline;
