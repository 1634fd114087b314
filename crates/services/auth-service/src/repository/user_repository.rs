//! User repository - lookups by unique field and insertion.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{NewUserRecord, User, UserQuery};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User store trait for dependency injection.
///
/// Implementations must keep username, email and identifier unique and
/// report a violation on insert as [`AppError::Conflict`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the user matching a single-field query
    async fn fetch(&self, query: &UserQuery) -> AppResult<Option<User>>;

    /// Persist a new user, returning the stored entity
    async fn insert(&self, record: NewUserRecord) -> AppResult<User>;
}

/// PostgreSQL-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn fetch(&self, query: &UserQuery) -> AppResult<Option<User>> {
        let condition = match query {
            UserQuery::ByEmail(email) => user::Column::Email.eq(email.as_str()),
            UserQuery::ByUsername(username) => user::Column::Username.eq(username.as_str()),
            UserQuery::ByIdentifier(identifier) => user::Column::Identifier.eq(*identifier),
        };

        let result = UserEntity::find()
            .filter(condition)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn insert(&self, record: NewUserRecord) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(record.name),
            username: Set(record.username),
            email: Set(record.email),
            phone: Set(record.phone),
            password_hash: Set(record.password_hash),
            identifier: Set(record.identifier),
            created_at: Set(chrono::Utc::now()),
        };

        match active_model.insert(&self.db).await {
            Ok(model) => Ok(User::from(model)),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!("Unique constraint violation on insert: {}", detail);
                    Err(AppError::conflict("User"))
                }
                _ => Err(AppError::from(err)),
            },
        }
    }
}
