//! Argon2id cost parameters for the credential store.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Memory cost in KiB (OWASP minimum for Argon2id).
const fn default_memory_kib() -> u32 {
    19_456
}

const fn default_iterations() -> u32 {
    2
}

const fn default_parallelism() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CredentialsConfig {
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,

    #[serde(default = "default_iterations")]
    pub iterations: u32,

    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

impl CredentialsConfig {
    /// Reject cost parameters Argon2 cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &str, reason: String| ConfigError::InvalidValue {
            field: format!("credentials.{field}"),
            reason,
        };

        if self.iterations == 0 {
            return Err(invalid("iterations", "must be at least 1".into()));
        }
        if self.parallelism == 0 {
            return Err(invalid("parallelism", "must be at least 1".into()));
        }
        if self.memory_kib < 8 * self.parallelism {
            return Err(invalid(
                "memory_kib",
                format!("must be at least 8 x parallelism ({})", 8 * self.parallelism),
            ));
        }
        Ok(())
    }
}
