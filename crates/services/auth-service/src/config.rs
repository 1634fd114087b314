//! Auth service configuration.

use std::env;

use common::{DatabaseConfig, HasherConfig};

/// Auth service configuration.
#[derive(Debug, Clone, Default)]
pub struct AuthServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Password hashing cost
    pub hasher: HasherConfig,
}

impl AuthServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from a variable lookup; unset or malformed
    /// values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_defaults = DatabaseConfig::default();
        let hasher_defaults = HasherConfig::default();
        let parse = |name: &str| parse_var(&lookup, name);

        Self {
            database: DatabaseConfig {
                url: lookup("AUTH_SERVICE_DATABASE_URL")
                    .or_else(|| lookup("DATABASE_URL"))
                    .unwrap_or(database_defaults.url),
                max_connections: parse("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or(database_defaults.max_connections),
                min_connections: parse("DATABASE_MIN_CONNECTIONS")
                    .unwrap_or(database_defaults.min_connections),
            },
            hasher: HasherConfig {
                memory_kib: parse("PASSWORD_HASH_MEMORY_KIB")
                    .unwrap_or(hasher_defaults.memory_kib),
                iterations: parse("PASSWORD_HASH_ITERATIONS")
                    .unwrap_or(hasher_defaults.iterations),
                parallelism: parse("PASSWORD_HASH_PARALLELISM")
                    .unwrap_or(hasher_defaults.parallelism),
            },
        }
    }
}

/// Read and parse a variable, ignoring it when unset or malformed.
fn parse_var<F>(lookup: &F, name: &str) -> Option<u32>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(name)?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!("Ignoring malformed {}={:?}", name, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    #[test]
    fn test_default_config_uses_recommended_hash_cost() {
        let config = AuthServiceConfig::default();

        assert_eq!(config.hasher, HasherConfig::default());
        assert_eq!(config.database.max_connections, 10);
    }

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = AuthServiceConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config.hasher, HasherConfig::default());
        assert_eq!(config.database.url, DatabaseConfig::default().url);
    }

    #[test]
    fn test_service_database_url_takes_precedence() {
        let config = AuthServiceConfig::from_lookup(lookup_from(&[
            ("AUTH_SERVICE_DATABASE_URL", "postgres://svc/auth"),
            ("DATABASE_URL", "postgres://shared/db"),
        ]));

        assert_eq!(config.database.url, "postgres://svc/auth");
    }

    #[test]
    fn test_database_url_fallback() {
        let config =
            AuthServiceConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://shared/db")]));

        assert_eq!(config.database.url, "postgres://shared/db");
    }

    #[test]
    fn test_hash_cost_overrides() {
        let config = AuthServiceConfig::from_lookup(lookup_from(&[
            ("PASSWORD_HASH_MEMORY_KIB", "4096"),
            ("PASSWORD_HASH_ITERATIONS", "3"),
            ("PASSWORD_HASH_PARALLELISM", "2"),
            ("DATABASE_MAX_CONNECTIONS", "20"),
        ]));

        assert_eq!(
            config.hasher,
            HasherConfig {
                memory_kib: 4096,
                iterations: 3,
                parallelism: 2,
            }
        );
        assert_eq!(config.database.max_connections, 20);
    }

    #[test]
    fn test_malformed_value_falls_back_to_default() {
        let config = AuthServiceConfig::from_lookup(lookup_from(&[
            ("PASSWORD_HASH_ITERATIONS", "abc"),
            ("PASSWORD_HASH_MEMORY_KIB", "8192"),
        ]));

        assert_eq!(config.hasher.iterations, HasherConfig::default().iterations);
        assert_eq!(config.hasher.memory_kib, 8192);
    }
}
