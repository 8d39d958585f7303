use std::sync::Arc;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User, normalize_email};
use crate::password::{hash_password, verify_password};
use crate::repository::UserRepository;

/// Service layer for registration and login
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a user with a hashed password and an empty inventory
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterRequest) -> UserResult<AuthResponse> {
        let email = normalize_email(&input.email);

        // Cheap rejection before paying for the hash; `create` re-checks atomically.
        if self.repository.get_by_email(&email).await?.is_some() {
            return Err(UserError::DuplicateEmail(email));
        }

        let password_hash = hash_password(input.password).await?;
        let created = self.repository.create(User::new(&email, password_hash)).await?;

        Ok(AuthResponse::ok(created.email))
    }

    /// Verify credentials. Unknown email and wrong password fail identically.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginRequest) -> UserResult<AuthResponse> {
        let email = normalize_email(&input.email);

        let user = self
            .repository
            .get_by_email(&email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !verify_password(input.password, user.password_hash).await? {
            tracing::info!("Login rejected");
            return Err(UserError::InvalidCredentials);
        }

        Ok(AuthResponse::ok(user.email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;

    fn register_request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_normalizes_email_and_hashes_password() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_get_by_email()
            .withf(|email| email == "a@x.com")
            .returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .withf(|user| {
                user.email == "a@x.com"
                    && user.password_hash.starts_with("$argon2")
                    && user.password_hash != "pw1"
                    && user.products.is_empty()
            })
            .times(1)
            .returning(Ok);

        let service = UserService::new(mock_repo);
        let response = service
            .register(register_request("  A@X.com ", "pw1"))
            .await
            .unwrap();

        assert_eq!(response, AuthResponse::ok("a@x.com"));
    }

    #[tokio::test]
    async fn test_register_existing_email_fails_without_hashing() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_get_by_email()
            .returning(|email| Ok(Some(User::new(email, "h".into()))));
        mock_repo.expect_create().never();

        let service = UserService::new(mock_repo);
        let result = service.register(register_request("a@x.com ", "pw")).await;

        assert!(matches!(result, Err(UserError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_login_with_correct_password() {
        let hash = hash_password("pw1".to_string()).await.unwrap();
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_get_by_email()
            .withf(|email| email == "a@x.com")
            .returning(move |email| Ok(Some(User::new(email, hash.clone()))));

        let service = UserService::new(mock_repo);
        let response = service.login(login_request("A@X.COM ", "pw1")).await.unwrap();

        assert_eq!(response.email, "a@x.com");
        assert_eq!(response.status, "ok");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
        let hash = hash_password("pw1".to_string()).await.unwrap();
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_get_by_email().returning(move |email| {
            if email == "a@x.com" {
                Ok(Some(User::new(email, hash.clone())))
            } else {
                Ok(None)
            }
        });

        let service = UserService::new(mock_repo);
        let wrong_password = service.login(login_request("a@x.com", "nope")).await;
        let unknown_email = service.login(login_request("b@x.com", "pw1")).await;

        let (Err(first), Err(second)) = (wrong_password, unknown_email) else {
            panic!("both logins should fail");
        };
        assert!(matches!(first, UserError::InvalidCredentials));
        assert_eq!(first.to_string(), second.to_string());
    }

    #[tokio::test]
    async fn test_login_with_unparsable_stored_hash_fails() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_get_by_email()
            .returning(|email| Ok(Some(User::new(email, "plaintext".into()))));

        let service = UserService::new(mock_repo);
        let result = service.login(login_request("a@x.com", "plaintext")).await;

        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }
}
