//! In-memory implementation of [`UserRepository`].
//!
//! Enforces the same uniqueness rules as the database schema. Intended for
//! tests and local runs without PostgreSQL.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{NewUserRecord, User, UserQuery};

use super::UserRepository;

/// Thread-safe via internal [`RwLock`].
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored users.
    ///
    /// Returns `0` if the internal lock is poisoned.
    pub fn len(&self) -> usize {
        self.users.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no users are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn matches_query(user: &User, query: &UserQuery) -> bool {
    match query {
        UserQuery::ByEmail(email) => user.email == *email,
        UserQuery::ByUsername(username) => user.username == *username,
        UserQuery::ByIdentifier(identifier) => user.identifier == *identifier,
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn fetch(&self, query: &UserQuery) -> AppResult<Option<User>> {
        let guard = self
            .users
            .read()
            .map_err(|e| AppError::internal(format!("lock poisoned: {e}")))?;

        Ok(guard.iter().find(|user| matches_query(user, query)).cloned())
    }

    async fn insert(&self, record: NewUserRecord) -> AppResult<User> {
        let mut guard = self
            .users
            .write()
            .map_err(|e| AppError::internal(format!("lock poisoned: {e}")))?;

        let duplicate = guard.iter().any(|user| {
            user.username == record.username
                || user.email == record.email
                || user.identifier == record.identifier
        });
        if duplicate {
            return Err(AppError::conflict("User"));
        }

        let user = User::from_record(Uuid::new_v4(), record);
        guard.push(user.clone());
        Ok(user)
    }
}
