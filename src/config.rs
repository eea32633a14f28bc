use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::scoring::ScoringConfig;

const CONFIG_FILE: &str = "tech-agents.yaml";

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    pub paths: PathsConfig,
    pub scoring: ScoringConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding the agent state files
    pub state: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            state: Config::home_dir().join("state"),
        }
    }
}

impl PathsConfig {
    pub fn cto_state(&self) -> PathBuf {
        Config::expand_path(&self.state).join("cto_agent_state.json")
    }

    pub fn principal_state(&self) -> PathBuf {
        Config::expand_path(&self.state).join("principal_se_state.json")
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let mut candidates = Vec::new();
        if let Ok(env_path) = std::env::var("TECH_AGENTS_CONFIG") {
            candidates.push(("TECH_AGENTS_CONFIG", PathBuf::from(env_path)));
        }
        if let Ok(dir) = std::env::var("TECH_AGENTS_DIR") {
            candidates.push(("TECH_AGENTS_DIR", PathBuf::from(dir).join(CONFIG_FILE)));
        }
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(("config dir", config_dir.join("tech-agents").join(CONFIG_FILE)));
        }
        // For development
        candidates.push(("working dir", PathBuf::from(CONFIG_FILE)));

        for (source, path) in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {} ({}): {}", source, path.display(), e);
                }
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Base directory for state, logs and config
    pub fn home_dir() -> PathBuf {
        std::env::var("TECH_AGENTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("tech-agents"))
    }

    /// Expand a path that may contain ~ or env vars
    pub fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::full(&path_str).unwrap_or_else(|_| path_str.clone());
        PathBuf::from(expanded.as_ref())
    }
}
