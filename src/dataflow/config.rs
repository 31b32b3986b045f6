//! Executor configuration.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Environment variable overriding [`ExecutorConfig::parallelism`].
pub const ENV_PARALLELISM: &str = "EPGM_PARALLELISM";
/// Environment variable overriding [`ExecutorConfig::partitions`].
pub const ENV_PARTITIONS: &str = "EPGM_PARTITIONS";

/// Configuration for a [`LocalExecutor`](super::LocalExecutor).
///
/// Values are immutable once handed to the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Worker threads; `0` lets rayon pick (one per core).
    pub parallelism: usize,
    /// Number of hash partitions datasets are split into. Must be ≥ 1.
    pub partitions: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self { parallelism: 0, partitions: 8 }
    }
}

impl ExecutorConfig {
    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism;
        self
    }

    pub fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions;
        self
    }

    /// Parse from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ExecutorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults, overridden by `EPGM_PARALLELISM` / `EPGM_PARTITIONS`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(v) = read_env_usize(ENV_PARALLELISM)? {
            config.parallelism = v;
        }
        if let Some(v) = read_env_usize(ENV_PARTITIONS)? {
            config.partitions = v;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.partitions == 0 {
            return Err(Error::ConfigError("partitions must be at least 1".into()));
        }
        Ok(())
    }
}

fn read_env_usize(name: &str) -> Result<Option<usize>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::ConfigError(format!("{name} must be a non-negative integer, got '{raw}'"))),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(Error::ConfigError(format!("{name}: {e}"))),
    }
}
