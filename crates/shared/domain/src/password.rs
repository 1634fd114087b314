//! Password hashing - salted, cost-parameterized one-way hashing.
//!
//! The `PasswordHasher` trait is the seam the validators depend on; it is
//! constructed once and injected, never held as process-wide state.

use argon2::{
    password_hash::{
        rand_core::OsRng, Error as HashError, PasswordHash, PasswordHasher as _,
        PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

use crate::error::{DomainError, DomainResult};

/// Hash and verify plain-text passwords.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain-text password with a fresh random salt.
    fn hash(&self, plain_text: &str) -> DomainResult<String>;

    /// Verify a plain-text password against a stored digest.
    ///
    /// # Returns
    /// * `Ok(false)` - the password does not match
    ///
    /// # Errors
    /// Returns a password error if the digest cannot be parsed or checked.
    fn verify(&self, plain_text: &str, digest: &str) -> DomainResult<bool>;
}

/// Argon2id hasher producing PHC-format strings.
#[derive(Clone, Default)]
pub struct Argon2Hasher {
    params: Params,
}

// Cost parameters only, no key material
impl std::fmt::Debug for Argon2Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Argon2Hasher")
            .field("memory_kib", &self.params.m_cost())
            .field("iterations", &self.params.t_cost())
            .field("parallelism", &self.params.p_cost())
            .finish()
    }
}

impl Argon2Hasher {
    /// Create a hasher with explicit cost parameters.
    ///
    /// # Arguments
    /// * `memory_kib` - Memory cost in KiB
    /// * `iterations` - Number of passes
    /// * `parallelism` - Degree of parallelism
    ///
    /// # Errors
    /// Returns a configuration error if Argon2 rejects the parameters.
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> DomainResult<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| DomainError::config(format!("Invalid Argon2 parameters: {}", e)))?;
        Ok(Self { params })
    }

    /// Memory cost in KiB.
    pub fn memory_kib(&self) -> u32 {
        self.params.m_cost()
    }

    /// Number of passes.
    pub fn iterations(&self) -> u32 {
        self.params.t_cost()
    }

    #[inline]
    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plain_text: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::password(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify(&self, plain_text: &str, digest: &str) -> DomainResult<bool> {
        let parsed = PasswordHash::new(digest)
            .map_err(|e| DomainError::password(format!("Invalid hash format: {}", e)))?;

        // Cost parameters are read from the digest itself
        match self.argon2().verify_password(plain_text.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(DomainError::password(format!(
                "Password verification failed: {}",
                e
            ))),
        }
    }
}
