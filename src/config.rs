// Global configuration management

use crate::engine::TranslateOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Overrides the config file location
pub const CONFIG_ENV: &str = "AMFPROXY_CONFIG";

/// Overrides `launcher.ffmpeg_path`
pub const FFMPEG_ENV: &str = "AMFPROXY_FFMPEG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub launcher: LauncherConfig,

    #[serde(default)]
    pub translate: TranslateOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// The real ffmpeg executable this proxy stands in for
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: PathBuf,

    /// Directory for per-run logs (platform default when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Write a per-run log before launching ffmpeg
    #[serde(default = "default_true_config")]
    pub write_run_log: bool,
}

fn default_ffmpeg_path() -> PathBuf {
    if cfg!(target_os = "windows") {
        PathBuf::from(r"C:\Program Files (x86)\vMix\streaming\ffmpeg.exe")
    } else {
        PathBuf::from("/usr/bin/ffmpeg")
    }
}

fn default_true_config() -> bool {
    true
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: default_ffmpeg_path(),
            log_dir: None,
            write_run_log: true,
        }
    }
}

impl LauncherConfig {
    /// Configured log directory, or the platform default
    pub fn resolved_log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.log_dir {
            return dir.clone();
        }

        if cfg!(target_os = "windows") {
            PathBuf::from(r"C:\ProgramData\vMix\streaming")
        } else {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("amfproxy")
                .join("logs")
        }
    }

    /// ffmpeg path, with an environment override taking precedence
    pub fn resolve_ffmpeg_path(&self, env_override: Option<OsString>) -> PathBuf {
        match env_override {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => self.ffmpeg_path.clone(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = if cfg!(target_os = "macos") {
            dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".config")
                .join("amfproxy")
        } else {
            dirs::config_dir()
                .context("Could not determine config directory")?
                .join("amfproxy")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from disk; a missing file yields the defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        Ok(config)
    }

    /// Like `load`, but a broken config only costs a warning. The proxy must
    /// still launch ffmpeg.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Using built-in defaults: {:#}", e);
            Config::default()
        })
    }

    /// ffmpeg path after applying `AMFPROXY_FFMPEG`
    pub fn ffmpeg_path(&self) -> PathBuf {
        self.launcher
            .resolve_ffmpeg_path(std::env::var_os(FFMPEG_ENV))
    }
}
