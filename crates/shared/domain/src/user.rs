//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User domain entity
#[derive(Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Globally unique identifier assigned at registration
    pub identifier: Uuid,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password_hash", &"[REDACTED]")
            .field("identifier", &self.identifier)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl User {
    /// Build a stored user from a persisted record.
    pub fn from_record(id: Uuid, record: NewUserRecord) -> Self {
        Self {
            id,
            name: record.name,
            username: record.username,
            email: record.email,
            phone: record.phone,
            password_hash: record.password_hash,
            identifier: record.identifier,
            created_at: Utc::now(),
        }
    }
}

/// Registration candidate with plain-text password and confirmation.
#[derive(Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub pass1: String,
    pub pass2: String,
    #[serde(default = "Uuid::new_v4")]
    pub identifier: Uuid,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("pass1", &"[REDACTED]")
            .field("pass2", &"[REDACTED]")
            .field("identifier", &self.identifier)
            .finish()
    }
}

impl NewUser {
    /// Create a candidate with a freshly generated identifier.
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        pass1: impl Into<String>,
        pass2: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            email: email.into(),
            phone: phone.into(),
            pass1: pass1.into(),
            pass2: pass2.into(),
            identifier: Uuid::new_v4(),
        }
    }

    /// Replace the generated identifier.
    pub fn with_identifier(mut self, identifier: Uuid) -> Self {
        self.identifier = identifier;
        self
    }

    /// Build the record to persist once validation has passed.
    pub fn into_record(self, password_hash: String) -> NewUserRecord {
        NewUserRecord {
            name: self.name,
            username: self.username,
            password_hash,
            email: self.email,
            phone: self.phone,
            identifier: self.identifier,
        }
    }
}

/// Record handed to the store; the store assigns `id` and `created_at`.
#[derive(Clone, PartialEq, Eq)]
pub struct NewUserRecord {
    pub name: String,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub phone: String,
    pub identifier: Uuid,
}

impl std::fmt::Debug for NewUserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUserRecord")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("identifier", &self.identifier)
            .finish()
    }
}

/// Login credentials. Never persisted.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Login handle
    pub username: String,
    /// User email address
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Registration identifier
    pub identifier: Uuid,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            email: user.email,
            phone: user.phone,
            identifier: user.identifier,
            created_at: user.created_at,
        }
    }
}
