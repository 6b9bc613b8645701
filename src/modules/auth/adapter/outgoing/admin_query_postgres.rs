use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use super::sea_orm_entity::admins::{Column as AdminColumn, Entity as AdminEntity};
use crate::auth::application::{
    domain::entities::Admin,
    ports::outgoing::{AdminQuery, AdminQueryError},
};

#[derive(Clone, Debug)]
pub struct AdminQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminQuery for AdminQueryPostgres {
    async fn find_by_id(&self, admin_id: Uuid) -> Result<Option<Admin>, AdminQueryError> {
        let admin = AdminEntity::find_by_id(admin_id)
            .one(&*self.db)
            .await
            .map_err(|e| AdminQueryError::DatabaseError(e.to_string()))?;

        Ok(admin.map(Admin::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AdminQueryError> {
        let admin = AdminEntity::find()
            .filter(AdminColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| AdminQueryError::DatabaseError(e.to_string()))?;

        Ok(admin.map(Admin::from))
    }
}
