mod admin_query_postgres;
mod admin_repository_postgres;
pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
mod token_repository_redis;

pub use admin_query_postgres::AdminQueryPostgres;
pub use admin_repository_postgres::AdminRepositoryPostgres;
pub use token_repository_redis::RedisTokenRepository;
