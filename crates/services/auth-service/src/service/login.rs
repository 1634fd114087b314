//! Login validation - checks credentials and authenticates against the store.

use std::sync::Arc;

use tracing::{debug, info};

use common::AppResult;
use domain::{
    is_email_valid, Credentials, PasswordHasher, User, UserQuery, ValidationResult,
    MSG_EMAIL_REQUIRED, MSG_INVALID_EMAIL, MSG_PASSWORD_REQUIRED,
};

use crate::repository::UserRepository;

/// Why a login attempt did not authenticate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginRejection {
    /// Credentials were malformed; no lookup was made
    Invalid(ValidationResult),
    /// No user with this email
    NotFound,
    /// Stored hash does not match the password
    PasswordMismatch,
}

/// Result of an authentication attempt that reached a decision.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    Authenticated(User),
    Rejected(LoginRejection),
}

impl LoginOutcome {
    /// The authenticated user, if any.
    pub fn into_user(self) -> Option<User> {
        match self {
            LoginOutcome::Authenticated(user) => Some(user),
            LoginOutcome::Rejected(_) => None,
        }
    }
}

/// Validates login credentials and authenticates the user.
pub struct LoginValidator {
    repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl LoginValidator {
    /// Create a validator over the given store and hasher
    pub fn new(repo: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repo, hasher }
    }

    /// Check that both fields are present and the email is well formed.
    pub fn validate(&self, credentials: &Credentials) -> ValidationResult {
        let mut errors = Vec::new();
        if credentials.email.is_empty() {
            errors.push(MSG_EMAIL_REQUIRED.to_string());
        }
        if credentials.password.is_empty() {
            errors.push(MSG_PASSWORD_REQUIRED.to_string());
        }
        if !is_email_valid(&credentials.email) {
            errors.push(MSG_INVALID_EMAIL.to_string());
        }
        ValidationResult::from_errors(errors)
    }

    /// Authenticate the credentials against the stored user.
    ///
    /// # Errors
    /// Store failures and unusable stored hashes are returned as errors;
    /// every other failure is a [`LoginOutcome::Rejected`].
    pub async fn authenticate(&self, credentials: &Credentials) -> AppResult<LoginOutcome> {
        info!("Authenticating user...");
        let validation = self.validate(credentials);
        if !validation.is_ok() {
            debug!("Login input rejected: {:?}", validation.messages);
            return Ok(LoginOutcome::Rejected(LoginRejection::Invalid(validation)));
        }

        debug!("Fetching user data...");
        let query = UserQuery::ByEmail(credentials.email.clone());
        let Some(user) = self.repo.fetch(&query).await? else {
            info!("User not found");
            return Ok(LoginOutcome::Rejected(LoginRejection::NotFound));
        };

        if !self.hasher.verify(&credentials.password, &user.password_hash)? {
            info!("Incorrect password");
            return Ok(LoginOutcome::Rejected(LoginRejection::PasswordMismatch));
        }

        info!(user_id = %user.id, "User authenticated");
        Ok(LoginOutcome::Authenticated(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use common::AppError;
    use domain::{Argon2Hasher, DomainError, DomainResult};
    use uuid::Uuid;

    use crate::repository::MockUserRepository;

    /// Hasher that treats the digest as `hashed:<plain>`.
    struct PlainHasher;

    impl PasswordHasher for PlainHasher {
        fn hash(&self, plain_text: &str) -> DomainResult<String> {
            Ok(format!("hashed:{}", plain_text))
        }

        fn verify(&self, plain_text: &str, digest: &str) -> DomainResult<bool> {
            digest
                .strip_prefix("hashed:")
                .map(|stored| stored == plain_text)
                .ok_or_else(|| DomainError::password("Invalid hash format"))
        }
    }

    fn stored_user(password_hash: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: "A".to_string(),
            username: "alice".to_string(),
            email: "a@b.com".to_string(),
            phone: "123".to_string(),
            password_hash: password_hash.to_string(),
            identifier: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    fn validator(repo: MockUserRepository) -> LoginValidator {
        LoginValidator::new(Arc::new(repo), Arc::new(PlainHasher))
    }

    #[test]
    fn test_validate_collects_all_messages() {
        let login = validator(MockUserRepository::new());

        let result = login.validate(&Credentials::new("", ""));

        assert!(!result.is_ok());
        assert_eq!(
            result.messages,
            vec![MSG_EMAIL_REQUIRED, MSG_PASSWORD_REQUIRED, MSG_INVALID_EMAIL]
        );
    }

    #[tokio::test]
    async fn test_invalid_email_skips_lookup() {
        let mut repo = MockUserRepository::new();
        repo.expect_fetch().never();

        let outcome = validator(repo)
            .authenticate(&Credentials::new("not-an-email", "password1"))
            .await
            .unwrap();

        match outcome {
            LoginOutcome::Rejected(LoginRejection::Invalid(result)) => {
                assert_eq!(result.messages, vec![MSG_INVALID_EMAIL]);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_email_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_fetch()
            .withf(|q| matches!(q, UserQuery::ByEmail(email) if email == "a@b.com"))
            .times(1)
            .returning(|_| Ok(None));

        let outcome = validator(repo)
            .authenticate(&Credentials::new("a@b.com", "password1"))
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            LoginOutcome::Rejected(LoginRejection::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_wrong_password_is_mismatch() {
        let mut repo = MockUserRepository::new();
        repo.expect_fetch()
            .returning(|_| Ok(Some(stored_user("hashed:password1"))));

        let outcome = validator(repo)
            .authenticate(&Credentials::new("a@b.com", "wrongpass"))
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            LoginOutcome::Rejected(LoginRejection::PasswordMismatch)
        ));
    }

    #[tokio::test]
    async fn test_correct_password_returns_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_fetch()
            .returning(|_| Ok(Some(stored_user("hashed:password1"))));

        let outcome = validator(repo)
            .authenticate(&Credentials::new("a@b.com", "password1"))
            .await
            .unwrap();

        assert_eq!(outcome.into_user().unwrap().username, "alice");
    }

    #[tokio::test]
    async fn test_store_error_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_fetch()
            .returning(|_| Err(AppError::internal("connection reset")));

        let result = validator(repo)
            .authenticate(&Credentials::new("a@b.com", "password1"))
            .await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_corrupt_stored_hash_is_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_fetch()
            .returning(|_| Ok(Some(stored_user("garbage"))));

        let login = LoginValidator::new(
            Arc::new(repo),
            Arc::new(Argon2Hasher::new(1024, 1, 1).unwrap()),
        );
        let result = login
            .authenticate(&Credentials::new("a@b.com", "password1"))
            .await;

        assert!(matches!(result, Err(AppError::Hash(_))));
    }
}
