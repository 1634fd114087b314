//! Repository layer for data access.

pub mod entities;
mod in_memory;
mod user_repository;

pub use in_memory::InMemoryUserStore;
pub use user_repository::{UserRepository, UserStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
