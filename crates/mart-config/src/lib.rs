mod config;
mod error;
mod gateway_config;
mod log_level;
mod logging_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use gateway_config::GatewayConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_SESSION_FILENAME: &str = "session.json";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

const CONFIG_DIR_ENV: &str = "MART_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".mart";
const CONFIG_FILENAME: &str = "config.toml";
