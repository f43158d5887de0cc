use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with an injected repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        let new_user = NewUser {
            name: command.name,
            email: command.email,
            password_hash,
        };

        let created_user = self.repository.create(new_user).await?;

        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User, UserError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFound(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::DisplayName;
    use crate::domain::user::models::EmailAddress;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, new_user: NewUser) -> Result<User, UserError>;
            async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
        }
    }

    fn persisted(new_user: NewUser) -> User {
        User {
            id: UserId(1),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_user_hashes_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|new_user| {
                new_user.name.as_str() == "Jean"
                    && new_user.email.as_str() == "jean@example.com"
                    // Plaintext never reaches the repository
                    && new_user.password_hash != "password123"
                    && new_user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|new_user| Ok(persisted(new_user)));

        let service = UserService::new(Arc::new(repository));

        let command = RegisterUserCommand {
            name: DisplayName::new("Jean".to_string()).unwrap(),
            email: EmailAddress::new("jean@example.com".to_string()).unwrap(),
            password: "password123".to_string(),
        };

        let user = service.register_user(command).await.unwrap();
        assert_eq!(user.id, UserId(1));
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_register_user_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|new_user| {
            Err(UserError::EmailAlreadyExists(
                new_user.email.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository));

        let command = RegisterUserCommand {
            name: DisplayName::new("Jean".to_string()).unwrap(),
            email: EmailAddress::new("jean@example.com".to_string()).unwrap(),
            password: "password123".to_string(),
        };

        let result = service.register_user(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_get_user_by_email_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .withf(|email: &str| email == "jean@example.com")
            .times(1)
            .returning(|email| {
                Ok(Some(User {
                    id: UserId(1),
                    name: DisplayName::new("Jean".to_string()).unwrap(),
                    email: EmailAddress::new(email.to_string()).unwrap(),
                    password_hash: "$argon2id$test_hash".to_string(),
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                }))
            });

        let service = UserService::new(Arc::new(repository));

        let user = service.get_user_by_email("jean@example.com").await.unwrap();
        assert_eq!(user.id, UserId(1));
    }

    #[tokio::test]
    async fn test_get_user_by_email_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user_by_email("ghost@x.io").await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user(UserId(99)).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }
}
