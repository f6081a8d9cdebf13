use crate::{
    CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, ENV_CONFIG_DIR, ENV_LOG_COLORED,
    ENV_LOG_FILE, ENV_LOG_LEVEL, LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for TITLER_CONFIG_DIR env var; without it no file is read
    /// 2. Load config.toml from that directory if it exists, else use defaults
    /// 3. Apply TITLER_* environment variable overrides
    ///
    /// Never creates files or directories. Does NOT validate - call
    /// validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME));

        let mut config = match config_path {
            Some(ref path) if path.exists() => Self::load_toml(path)?,
            _ => Config::default(),
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// The config directory named by TITLER_CONFIG_DIR, if any.
    pub fn config_dir() -> Option<PathBuf> {
        std::env::var_os(ENV_CONFIG_DIR)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.logging.validate()?;

        if self.logging.file.is_some() && Self::config_dir().is_none() {
            return Err(ConfigError::logging(format!(
                "logging.file requires {} to be set",
                ENV_CONFIG_DIR
            )));
        }

        Ok(())
    }

    /// Absolute path of the log file, or None when logging to stderr.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        let file = self.logging.file.as_ref()?;
        Self::config_dir().map(|dir| dir.join(file))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        debug!("Configuration loaded:");
        debug!(
            "  config dir: {}",
            Self::config_dir()
                .map(|dir| dir.display().to_string())
                .unwrap_or_else(|| String::from("(none)"))
        );
        debug!(
            "  logging: {} -> {} (colored: {})",
            *self.logging.level,
            self.logging.file.as_deref().unwrap_or("stderr"),
            self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        Self::apply_env_parse(ENV_LOG_LEVEL, &mut self.logging.level);
        Self::apply_env_bool(ENV_LOG_COLORED, &mut self.logging.colored);
        Self::apply_env_option_string(ENV_LOG_FILE, &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
