//! Runtime configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DATA_DIR: &str = ".stickyboard";
pub const DEFAULT_SAVE_DELAY_MIN_MS: u64 = 500;
pub const DEFAULT_SAVE_DELAY_MAX_MS: u64 = 1100;
pub const DEFAULT_LOAD_DELAY_MIN_MS: u64 = 400;
pub const DEFAULT_LOAD_DELAY_MAX_MS: u64 = 1200;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(String),
    #[error("{name}: min {min_ms}ms exceeds max {max_ms}ms")]
    InvertedDelay { name: &'static str, min_ms: u64, max_ms: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    File,
    Memory,
}

/// Inclusive range of simulated latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    /// No latency at all.
    pub const ZERO: Self = Self { min_ms: 0, max_ms: 0 };

    /// Pick a delay uniformly from the range.
    #[must_use]
    pub fn sample(&self) -> Duration {
        if self.max_ms <= self.min_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rand::random_range(self.min_ms..=self.max_ms))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub storage: StorageKind,
    pub save_delay: DelayRange,
    pub load_delay: DelayRange,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `STICKYBOARD_DATA_DIR`: default `.stickyboard`
    /// - `STICKYBOARD_STORAGE`: `file` (default) or `memory`
    /// - `REMOTE_SAVE_DELAY_MIN_MS` / `REMOTE_SAVE_DELAY_MAX_MS`: default 500 / 1100
    /// - `REMOTE_LOAD_DELAY_MIN_MS` / `REMOTE_LOAD_DELAY_MAX_MS`: default 400 / 1200
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown storage kind or a delay range whose
    /// minimum exceeds its maximum.
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = std::env::var("STICKYBOARD_DATA_DIR").map_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let storage = parse_storage(std::env::var("STICKYBOARD_STORAGE").ok().as_deref())?;
        let save_delay = delay_range(
            "REMOTE_SAVE_DELAY",
            env_parse("REMOTE_SAVE_DELAY_MIN_MS", DEFAULT_SAVE_DELAY_MIN_MS),
            env_parse("REMOTE_SAVE_DELAY_MAX_MS", DEFAULT_SAVE_DELAY_MAX_MS),
        )?;
        let load_delay = delay_range(
            "REMOTE_LOAD_DELAY",
            env_parse("REMOTE_LOAD_DELAY_MIN_MS", DEFAULT_LOAD_DELAY_MIN_MS),
            env_parse("REMOTE_LOAD_DELAY_MAX_MS", DEFAULT_LOAD_DELAY_MAX_MS),
        )?;

        Ok(Self { data_dir, storage, save_delay, load_delay })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_storage(raw: Option<&str>) -> Result<StorageKind, ConfigError> {
    match raw.unwrap_or("file") {
        "file" => Ok(StorageKind::File),
        "memory" => Ok(StorageKind::Memory),
        other => Err(ConfigError::Parse(format!("unknown STICKYBOARD_STORAGE: {other}"))),
    }
}

fn delay_range(name: &'static str, min_ms: u64, max_ms: u64) -> Result<DelayRange, ConfigError> {
    if min_ms > max_ms {
        return Err(ConfigError::InvertedDelay { name, min_ms, max_ms });
    }
    Ok(DelayRange { min_ms, max_ms })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
