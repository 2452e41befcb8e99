//! Runtime configuration, loaded from YAML.
//!
//! ```yaml
//! buffer_size: 64
//! duplicate_lines: reject
//! ```
//!
//! Every key is optional; missing ones take the values of [`OrderSystemConfig::default`].

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::order_service::DuplicateLines;

/// Channel capacity used when none is configured.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrderSystemConfig {
    /// Capacity of each actor's request channel.
    pub buffer_size: usize,
    /// How requests naming one product on several lines are handled.
    pub duplicate_lines: DuplicateLines,
}

impl Default for OrderSystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            duplicate_lines: DuplicateLines::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("buffer_size must be greater than zero")]
    ZeroBufferSize,
}

impl OrderSystemConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        // tokio's mpsc::channel panics on a zero capacity
        if config.buffer_size == 0 {
            return Err(ConfigError::ZeroBufferSize);
        }
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }
}
