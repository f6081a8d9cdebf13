use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, LogLevel};

use std::path::{Component, Path};

use serde::Deserialize;

/// Diagnostics settings. Logs never go to stdout, which carries the title.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log file name inside the config directory; stderr when unset
    pub file: Option<String>,
    /// Colored level names on stderr
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            file: None,
            colored: DEFAULT_LOG_COLORED,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(ref file) = self.file else {
            return Ok(());
        };

        if file.trim().is_empty() {
            return Err(ConfigError::logging("logging.file cannot be empty"));
        }

        let path = Path::new(file);
        if path.is_absolute()
            || path
                .components()
                .any(|component| !matches!(component, Component::Normal(_)))
        {
            return Err(ConfigError::logging(format!(
                "logging.file must be relative and cannot contain '..', got {}",
                file
            )));
        }

        Ok(())
    }
}
