//! Validation services - login and registration use cases.
//!
//! Both validators depend only on the `UserRepository` and
//! `PasswordHasher` abstractions injected at construction.

mod login;
mod registration;

pub use login::{LoginOutcome, LoginRejection, LoginValidator};
pub use registration::RegistrationValidator;
