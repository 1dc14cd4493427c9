use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kernel::history::MAX_LENGTH;
use crate::kernel::time::TICK_MS;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Telemetry engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Driver cadence in milliseconds.
    pub tick_ms: u64,
    /// Samples retained per channel.
    pub history_len: usize,
    /// Fixed RNG seed; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            history_len: MAX_LENGTH,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

/// Thrust stand serial link and acquisition settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandConfig {
    pub port: String,
    pub baud_rate: u32,
    /// Bound on a single blocking read from the port.
    pub read_timeout_ms: u64,
    /// How often the stand drains captured samples.
    pub poll_ms: u64,
    /// Samples buffered between the capture thread and the stand loop.
    pub queue_capacity: usize,
}

impl Default for StandConfig {
    fn default() -> Self {
        Self {
            port: "/dev/tty.usbserial-0001".to_string(),
            baud_rate: 115_200,
            read_timeout_ms: 1_000,
            poll_ms: 100,
            queue_capacity: 4_096,
        }
    }
}

impl StandConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_ms.max(1))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundControlConfig {
    pub engine: EngineConfig,
    pub stand: StandConfig,
}

impl GroundControlConfig {
    /// Loads a JSON config file. Missing fields keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Defaults when `path` is `None`, otherwise the file contents.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }
}
