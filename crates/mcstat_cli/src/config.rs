//! CLI configuration management.
//!
//! Loads `mcstat.toml` with environment variable override support. Every
//! key is optional:
//!
//! ```toml
//! seed = 42              # reseed before each command; omit for entropy
//! max_iterations = 1000000  # cap on rejection / waiting-time loops
//! n_sum = 10             # uniforms averaged per CLT value
//! log_level = "info"
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use mcstat_core::types::IterationBudget;
use mcstat_engine::variates::DEFAULT_N_SUM;

/// Log levels accepted by `log_level`.
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct McstatConfig {
    /// Seed applied when a command gives none
    #[serde(default)]
    pub seed: Option<u64>,

    /// Iteration cap for open-ended acceptance loops
    #[serde(default)]
    pub max_iterations: Option<usize>,

    /// Uniforms averaged per CLT value
    #[serde(default = "default_n_sum")]
    pub n_sum: usize,

    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_n_sum() -> usize {
    DEFAULT_N_SUM
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for McstatConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_iterations: None,
            n_sum: default_n_sum(),
            log_level: default_log_level(),
        }
    }
}

impl McstatConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from `path` when it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `MCSTAT_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup("MCSTAT_SEED") {
            self.seed = Some(parse_env("MCSTAT_SEED", &seed)?);
        }

        if let Some(max_iterations) = lookup("MCSTAT_MAX_ITERATIONS") {
            self.max_iterations = Some(parse_env("MCSTAT_MAX_ITERATIONS", &max_iterations)?);
        }

        if let Some(n_sum) = lookup("MCSTAT_N_SUM") {
            self.n_sum = parse_env("MCSTAT_N_SUM", &n_sum)?;
        }

        if let Some(log_level) = lookup("MCSTAT_LOG_LEVEL") {
            self.log_level = log_level;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.n_sum == 0 {
            errors.push("n_sum must be greater than 0".to_string());
        }

        if self.max_iterations == Some(0) {
            errors.push("max_iterations must be greater than 0 when set".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Iteration budget implied by `max_iterations`
    pub fn budget(&self) -> IterationBudget {
        IterationBudget::from_option(self.max_iterations)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Parse(format!("{}='{}' is not a valid value", key, value)))
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file or environment
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
