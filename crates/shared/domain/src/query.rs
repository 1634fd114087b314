//! Typed lookups against the user store.

use uuid::Uuid;

/// Single-field user lookup. Each variant targets a unique column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserQuery {
    ByEmail(String),
    ByUsername(String),
    ByIdentifier(Uuid),
}

impl UserQuery {
    /// Name of the field this query filters on.
    pub fn field(&self) -> &'static str {
        match self {
            UserQuery::ByEmail(_) => "email",
            UserQuery::ByUsername(_) => "username",
            UserQuery::ByIdentifier(_) => "identifier",
        }
    }
}

impl std::fmt::Display for UserQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserQuery::ByEmail(email) => write!(f, "email={}", email),
            UserQuery::ByUsername(username) => write!(f, "username={}", username),
            UserQuery::ByIdentifier(id) => write!(f, "identifier={}", id),
        }
    }
}
