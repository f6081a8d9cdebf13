mod config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = false;

const ENV_CONFIG_DIR: &str = "TITLER_CONFIG_DIR";
const ENV_LOG_LEVEL: &str = "TITLER_LOG_LEVEL";
const ENV_LOG_COLORED: &str = "TITLER_LOG_COLORED";
const ENV_LOG_FILE: &str = "TITLER_LOG_FILE";
