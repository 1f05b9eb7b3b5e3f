mod auth_config;
mod config;
mod database_config;
mod delivery_config;
mod error;
mod log_level;
mod logging_config;
mod otp_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use delivery_config::{DeliveryConfig, DeliveryMode};
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use otp_config::OtpConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "PH_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ph";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "identity.db";

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
const MAX_TOKEN_TTL_HOURS: i64 = 720;

const DEFAULT_OTP_TTL_SECS: i64 = 300;
const MAX_OTP_TTL_SECS: i64 = 24 * 60 * 60;
const DEFAULT_OTP_CODE_MIN: u32 = 1000;
const DEFAULT_OTP_CODE_MAX: u32 = 9999;
const DEFAULT_OTP_PURGE_INTERVAL_SECS: u64 = 60;

const DEFAULT_DELIVERY_TIMEOUT_SECS: u64 = 10;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
