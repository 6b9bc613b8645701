pub mod auth;

pub use auth::AuthenticatedAdmin;
