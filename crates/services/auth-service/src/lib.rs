//! Auth Service Library
//!
//! Login and registration validation over a user store and an injected
//! password hasher. The store is PostgreSQL via SeaORM in production and
//! [`repository::InMemoryUserStore`] in tests.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::AppResult;
use domain::PasswordHasher;

use crate::config::AuthServiceConfig;
use crate::infra::Database;
use crate::repository::{UserRepository, UserStore};
use crate::service::{LoginValidator, RegistrationValidator};

/// The two validators, sharing one store and one hasher.
pub struct AuthContext {
    pub login: LoginValidator,
    pub registration: RegistrationValidator,
}

impl AuthContext {
    /// Wire both validators to the same collaborators.
    pub fn new(repo: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            login: LoginValidator::new(repo.clone(), hasher.clone()),
            registration: RegistrationValidator::new(repo, hasher),
        }
    }

    /// Connect to the database (applying pending migrations) and build
    /// the hasher described by the configuration.
    pub async fn connect(config: &AuthServiceConfig) -> AppResult<Self> {
        let hasher = config.hasher.build()?;
        info!("Password hasher ready: {:?}", hasher);

        let db = Database::connect(&config.database).await?;
        let repo = Arc::new(UserStore::new(db.get_connection()));

        Ok(Self::new(repo, Arc::new(hasher)))
    }
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> AppResult<()> {
    let config = AuthServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Check that the configured database answers a trivial query.
pub async fn ping_database() -> AppResult<()> {
    let config = AuthServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;
    db.ping().await?;
    info!("Database reachable");
    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
