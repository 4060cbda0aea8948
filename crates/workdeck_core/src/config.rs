//! Runtime configuration for core callers.
//!
//! # Responsibility
//! - Resolve logging and seed options from `WORKDECK_*` environment variables.
//! - Build the initial workspace store from those options.
//!
//! # Invariants
//! - Blank variables behave as unset.
//! - Resolution never fails; unknown values fall back to defaults.

use crate::logging::default_log_level;
use crate::repo::seed::SeedError;
use crate::repo::workspace_store::WorkspaceStore;
use std::path::PathBuf;

pub const ENV_LOG_LEVEL: &str = "WORKDECK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "WORKDECK_LOG_DIR";
pub const ENV_SEED: &str = "WORKDECK_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// One of `trace|debug|info|warn|error`; validated by logging init.
    pub log_level: String,
    /// Rolling log directory; `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
    /// Whether the store starts from the built-in seed domains.
    pub load_seed: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            load_seed: true,
        }
    }
}

impl CoreConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`, which maps a variable name
    /// to its raw value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        config.log_dir = read(ENV_LOG_DIR).map(PathBuf::from);
        if let Some(seed) = read(ENV_SEED) {
            config.load_seed = !matches!(
                seed.to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }
        config
    }

    /// Creates the initial store: seeded or empty per `load_seed`.
    pub fn build_store(&self) -> Result<WorkspaceStore, SeedError> {
        if self.load_seed {
            WorkspaceStore::with_seed()
        } else {
            Ok(WorkspaceStore::new())
        }
    }
}
