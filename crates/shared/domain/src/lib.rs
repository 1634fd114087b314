//! Domain layer - Core entities, value objects and validation rules.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod constants;
pub mod email;
pub mod error;
pub mod password;
pub mod query;
pub mod user;
pub mod validation;

pub use constants::*;
pub use email::is_email_valid;
pub use error::{DomainError, DomainResult};
pub use password::{Argon2Hasher, PasswordHasher};
pub use query::UserQuery;
pub use user::{Credentials, NewUser, NewUserRecord, User, UserResponse};
pub use validation::{is_password_length_valid, passwords_match, ValidationResult};
