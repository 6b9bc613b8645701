use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::{
    domain::entities::AdminProfile,
    ports::{
        incoming::use_cases::{SeedAdminCommand, SeedAdminError, SeedAdminUseCase, SeedOutcome},
        outgoing::{AdminQuery, AdminRepository, AdminRepositoryError, NewAdmin, PasswordHasher},
    },
};

#[derive(Clone)]
pub struct SeedAdminService<Q, R>
where
    Q: AdminQuery,
    R: AdminRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> SeedAdminService<Q, R>
where
    Q: AdminQuery,
    R: AdminRepository,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> SeedAdminUseCase for SeedAdminService<Q, R>
where
    Q: AdminQuery,
    R: AdminRepository,
{
    async fn execute(&self, command: SeedAdminCommand) -> Result<SeedOutcome, SeedAdminError> {
        let existing = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| SeedAdminError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            return Ok(SeedOutcome::AlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| SeedAdminError::HashingFailed(e.to_string()))?;

        let created = self
            .repository
            .create_admin(NewAdmin {
                email: command.email().to_string(),
                password_hash,
                display_name: command.display_name().to_string(),
            })
            .await;

        match created {
            Ok(admin) => {
                info!(admin_id = %admin.id, email = %admin.email, "Admin account created");
                Ok(SeedOutcome::Created(AdminProfile::from(&admin)))
            }
            // Another instance won the race
            Err(AdminRepositoryError::AdminAlreadyExists) => Ok(SeedOutcome::AlreadyExists),
            Err(e) => Err(SeedAdminError::RepositoryError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;

    use crate::auth::application::domain::entities::Admin;
    use crate::auth::application::ports::outgoing::{AdminQueryError, HashError};

    fn admin(email: &str) -> Admin {
        Admin {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: "hashed".to_string(),
            display_name: "Owner".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[derive(Clone)]
    struct MockAdminQuery {
        existing: Option<Admin>,
    }

    #[async_trait]
    impl AdminQuery for MockAdminQuery {
        async fn find_by_id(&self, _admin_id: Uuid) -> Result<Option<Admin>, AdminQueryError> {
            unimplemented!("Not used in seed tests")
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<Admin>, AdminQueryError> {
            Ok(self.existing.clone())
        }
    }

    #[derive(Clone, Default)]
    struct MockAdminRepository {
        calls: Arc<AtomicUsize>,
        conflict: bool,
    }

    #[async_trait]
    impl AdminRepository for MockAdminRepository {
        async fn create_admin(&self, new: NewAdmin) -> Result<Admin, AdminRepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.conflict {
                return Err(AdminRepositoryError::AdminAlreadyExists);
            }
            let mut created = admin(&new.email);
            created.password_hash = new.password_hash;
            created.display_name = new.display_name;
            Ok(created)
        }
    }

    struct FakeHasher;

    #[async_trait]
    impl PasswordHasher for FakeHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed:{password}"))
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            unimplemented!("Not used in seed tests")
        }
    }

    fn command() -> SeedAdminCommand {
        SeedAdminCommand::new(
            "owner@example.com".to_string(),
            "correct-horse".to_string(),
            Some("Owner".to_string()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn creates_admin_when_missing() {
        let repo = MockAdminRepository::default();
        let service = SeedAdminService::new(
            MockAdminQuery { existing: None },
            repo.clone(),
            Arc::new(FakeHasher),
        );

        let outcome = service.execute(command()).await.unwrap();

        match outcome {
            SeedOutcome::Created(profile) => {
                assert_eq!(profile.email, "owner@example.com");
                assert_eq!(profile.display_name, "Owner");
            }
            other => panic!("Expected Created, got {:?}", other),
        }
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn existing_admin_is_left_alone() {
        let repo = MockAdminRepository::default();
        let service = SeedAdminService::new(
            MockAdminQuery {
                existing: Some(admin("owner@example.com")),
            },
            repo.clone(),
            Arc::new(FakeHasher),
        );

        let outcome = service.execute(command()).await.unwrap();

        assert_eq!(outcome, SeedOutcome::AlreadyExists);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unique_violation_counts_as_existing() {
        let repo = MockAdminRepository {
            calls: Arc::new(AtomicUsize::new(0)),
            conflict: true,
        };
        let service =
            SeedAdminService::new(MockAdminQuery { existing: None }, repo, Arc::new(FakeHasher));

        assert_eq!(
            service.execute(command()).await.unwrap(),
            SeedOutcome::AlreadyExists
        );
    }
}
