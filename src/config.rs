//! Runtime configuration.
//!
//! Values come from the environment, after loading a `.env` file from the
//! working directory when one exists.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `PROPLINK_STORE` | `.proplink` | Directory holding `roster.yaml` and `form.yaml` |
//! | `PROPLINK_UNRESOLVED_AGENT` | `show_all` | Property selector for unknown agent codes (`show_all` / `show_none`) |
//! | `PROPLINK_LOG` | `warn` | Log filter used when `RUST_LOG` is unset |

use std::path::PathBuf;

use thiserror::Error;

use crate::linkage::UnresolvedAgentPolicy;

const STORE_VAR: &str = "PROPLINK_STORE";
const POLICY_VAR: &str = "PROPLINK_UNRESOLVED_AGENT";
const LOG_VAR: &str = "PROPLINK_LOG";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable holds a value this crate cannot interpret.
    #[error("invalid value for {var}: {reason}")]
    InvalidValue {
        /// Offending variable.
        var: &'static str,
        /// Parser message.
        reason: String,
    },
}

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkageConfig {
    /// Root directory of the roster store.
    pub store_root: PathBuf,
    /// Property selector behavior for unknown agent codes.
    pub unresolved_agent_policy: UnresolvedAgentPolicy,
    /// Fallback log filter.
    pub log_level: String,
}

impl Default for LinkageConfig {
    fn default() -> Self {
        Self {
            store_root: PathBuf::from(".proplink"),
            unresolved_agent_policy: UnresolvedAgentPolicy::default(),
            log_level: "warn".to_string(),
        }
    }
}

impl LinkageConfig {
    /// Loads `.env` (if present) and reads the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an unparseable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(root) = lookup(STORE_VAR).filter(|v| !v.is_empty()) {
            config.store_root = PathBuf::from(root);
        }
        if let Some(policy) = lookup(POLICY_VAR).filter(|v| !v.is_empty()) {
            config.unresolved_agent_policy = policy
                .parse()
                .map_err(|reason| ConfigError::InvalidValue { var: POLICY_VAR, reason })?;
        }
        if let Some(level) = lookup(LOG_VAR).filter(|v| !v.is_empty()) {
            config.log_level = level;
        }

        Ok(config)
    }
}
