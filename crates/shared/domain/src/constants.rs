//! Domain-level constants.
//!
//! These constants define business rules and the user-facing messages
//! produced by validation.

// =============================================================================
// Password policy
// =============================================================================

/// Minimum password length (inclusive, in characters)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length (inclusive, in characters)
pub const MAX_PASSWORD_LENGTH: usize = 16;

// =============================================================================
// Email format
// =============================================================================

/// Full-match pattern for `localpart@domain.tld`.
pub const EMAIL_PATTERN: &str =
    r"^(?:[A-Za-z0-9]+[._-])*[A-Za-z0-9]+@[A-Za-z0-9-]+(?:\.[A-Za-z]{2,})+$";

// =============================================================================
// Validation messages
// =============================================================================

pub const MSG_NAME_REQUIRED: &str = "Name is required";
pub const MSG_USERNAME_REQUIRED: &str = "Username is required";
pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
pub const MSG_PHONE_REQUIRED: &str = "Phone Number is required";
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required";
pub const MSG_CONFIRM_PASSWORD_REQUIRED: &str = "Confirm Password is required";
pub const MSG_INVALID_EMAIL: &str = "Invalid Email";
pub const MSG_PASSWORD_LENGTH: &str = "Password must be 8-16 characters long";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const MSG_USER_EXISTS: &str = "User already exists";
pub const MSG_REGISTERED: &str = "User registered successfully";
