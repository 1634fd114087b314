//! Registration validation - validates a candidate and persists it.
//!
//! Every check runs and every failure message is collected, in a fixed
//! order, so callers can show the full list at once.

use std::sync::Arc;

use tracing::{debug, info, warn};

use common::{AppError, AppResult};
use domain::{
    is_email_valid, is_password_length_valid, passwords_match, NewUser, PasswordHasher,
    UserQuery, ValidationResult, MSG_CONFIRM_PASSWORD_REQUIRED, MSG_EMAIL_REQUIRED,
    MSG_INVALID_EMAIL, MSG_NAME_REQUIRED, MSG_PASSWORD_LENGTH, MSG_PASSWORD_MISMATCH,
    MSG_PASSWORD_REQUIRED, MSG_PHONE_REQUIRED, MSG_REGISTERED, MSG_USERNAME_REQUIRED,
    MSG_USER_EXISTS,
};

use crate::repository::UserRepository;

/// Validates registration candidates and saves accepted ones.
pub struct RegistrationValidator {
    repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegistrationValidator {
    /// Create a validator over the given store and hasher
    pub fn new(repo: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repo, hasher }
    }

    /// Run every registration check and collect the failures.
    ///
    /// # Errors
    /// Only store failures during the uniqueness lookups.
    pub async fn validate(&self, candidate: &NewUser) -> AppResult<ValidationResult> {
        let required = [
            (&candidate.name, MSG_NAME_REQUIRED),
            (&candidate.username, MSG_USERNAME_REQUIRED),
            (&candidate.email, MSG_EMAIL_REQUIRED),
            (&candidate.phone, MSG_PHONE_REQUIRED),
            (&candidate.pass1, MSG_PASSWORD_REQUIRED),
            (&candidate.pass2, MSG_CONFIRM_PASSWORD_REQUIRED),
        ];
        let mut errors: Vec<String> = required
            .into_iter()
            .filter(|(value, _)| value.is_empty())
            .map(|(_, message)| message.to_string())
            .collect();

        if !is_email_valid(&candidate.email) {
            errors.push(MSG_INVALID_EMAIL.to_string());
        }
        if !is_password_length_valid(&candidate.pass1) {
            errors.push(MSG_PASSWORD_LENGTH.to_string());
        }
        if !passwords_match(&candidate.pass1, &candidate.pass2) {
            errors.push(MSG_PASSWORD_MISMATCH.to_string());
        }
        if !self.is_user_unique(candidate).await? {
            errors.push(MSG_USER_EXISTS.to_string());
        }

        Ok(ValidationResult::from_errors(errors))
    }

    /// Whether no stored user shares the candidate's username, email or
    /// identifier. Empty username/email values are not looked up.
    pub async fn is_user_unique(&self, candidate: &NewUser) -> AppResult<bool> {
        let mut queries = Vec::with_capacity(3);
        if !candidate.username.is_empty() {
            queries.push(UserQuery::ByUsername(candidate.username.clone()));
        }
        if !candidate.email.is_empty() {
            queries.push(UserQuery::ByEmail(candidate.email.clone()));
        }
        queries.push(UserQuery::ByIdentifier(candidate.identifier));

        for query in &queries {
            if self.repo.fetch(query).await?.is_some() {
                debug!("Existing user matches {}", query.field());
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Validate the candidate and, if it passes, hash its password and
    /// persist it.
    ///
    /// # Errors
    /// Store and hashing failures. A uniqueness conflict raised by the store
    /// itself is reported as a failed [`ValidationResult`] instead.
    pub async fn register(&self, candidate: NewUser) -> AppResult<ValidationResult> {
        info!("Validating registration details...");
        let validation = self.validate(&candidate).await?;
        if !validation.is_ok() {
            info!("Registration validation failed");
            return Ok(validation);
        }

        debug!("Hashing password...");
        let password_hash = self.hasher.hash(&candidate.pass1)?;
        let record = candidate.into_record(password_hash);

        debug!("Saving user data...");
        match self.repo.insert(record).await {
            Ok(user) => {
                info!(user_id = %user.id, "User registration successful");
                Ok(ValidationResult::success(MSG_REGISTERED))
            }
            Err(AppError::Conflict(_)) => {
                warn!("Store rejected registration as duplicate");
                Ok(ValidationResult::failure(vec![MSG_USER_EXISTS.to_string()]))
            }
            Err(e) => Err(e),
        }
    }
}
