// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pacer.toml configuration.
//!
//! All keys are optional; defaults are centralized in [`defaults`] so
//! the CLI, `pacer init`, and the docs stay in agreement.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::discovery;

/// Supported value of the `version` key.
pub const CONFIG_VERSION: u32 = 1;

/// Centralized default values for configuration.
pub mod defaults {
    /// Default worker count (a single process).
    pub const WORKERS: usize = 1;

    /// Default shared runtime log, relative to the project root.
    pub const LOG_PATH: &str = ".pacer/runtime_log";

    /// Default barrier marker directory, relative to the project root.
    pub const BARRIER_DIR: &str = ".pacer/barrier";

    /// Default leader poll interval while waiting on peers (ms).
    pub const POLL_MS: u64 = 50;
}

/// Errors raised while loading pacer.toml.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported config version {} in {} (expected {})", .found, .path.display(), CONFIG_VERSION)]
    UnsupportedVersion { found: u32, path: PathBuf },
}

/// Root configuration loaded from pacer.toml.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Config file format version.
    pub version: u32,

    /// Total parallel worker processes for this project.
    pub workers: usize,

    /// Runtime log settings.
    pub log: LogConfig,

    /// Completion barrier settings.
    pub barrier: BarrierConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            workers: defaults::WORKERS,
            log: LogConfig::default(),
            barrier: BarrierConfig::default(),
        }
    }
}

/// Runtime log settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Shared runtime log, relative to the project root.
    pub path: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { path: defaults::LOG_PATH.into() }
    }
}

/// Completion barrier settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BarrierConfig {
    /// Completion markers live here, one per worker.
    pub dir: PathBuf,

    /// Leader poll interval while waiting on peers, in milliseconds.
    pub poll_ms: u64,
}

impl Default for BarrierConfig {
    fn default() -> Self {
        Self {
            dir: defaults::BARRIER_DIR.into(),
            poll_ms: defaults::POLL_MS,
        }
    }
}

/// Load configuration from an explicit path.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if config.version != CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            found: config.version,
            path: path.to_path_buf(),
        });
    }
    Ok(config)
}

/// Resolve configuration for a command run from `cwd`.
///
/// An explicit path wins; otherwise pacer.toml is discovered by
/// walking up from `cwd`. Returns the config together with the project
/// root that relative paths inside it resolve against: the config
/// file's directory when one was found, `cwd` otherwise.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<(Config, PathBuf), ConfigError> {
    let found = explicit
        .map(Path::to_path_buf)
        .or_else(|| discovery::find_config(cwd));

    match found {
        Some(path) => {
            let config = load(&path)?;
            let root = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
            Ok((config, root))
        }
        None => Ok((Config::default(), cwd.to_path_buf())),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
