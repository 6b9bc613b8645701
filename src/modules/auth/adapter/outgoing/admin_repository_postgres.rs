use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set, SqlErr};
use uuid::Uuid;

use super::sea_orm_entity::admins::ActiveModel as AdminActiveModel;
use crate::auth::application::{
    domain::entities::Admin,
    ports::outgoing::{AdminRepository, AdminRepositoryError, NewAdmin},
};

#[derive(Clone, Debug)]
pub struct AdminRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_error(e: DbErr) -> AdminRepositoryError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AdminRepositoryError::AdminAlreadyExists,
        _ => AdminRepositoryError::DatabaseError(e.to_string()),
    }
}

#[async_trait]
impl AdminRepository for AdminRepositoryPostgres {
    async fn create_admin(&self, admin: NewAdmin) -> Result<Admin, AdminRepositoryError> {
        let now = Utc::now().fixed_offset();

        let active = AdminActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(admin.email),
            password_hash: Set(admin.password_hash),
            display_name: Set(admin.display_name),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active.insert(&*self.db).await.map_err(map_db_error)?;

        Ok(Admin::from(model))
    }
}
