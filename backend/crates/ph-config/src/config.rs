use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, DeliveryConfig, LoggingConfig, OtpConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub otp: OtpConfig,
    pub delivery: DeliveryConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. Check for PH_CONFIG_DIR env var, else use ./.ph/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PH_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

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

    /// Get the config directory.
    /// Priority: PH_CONFIG_DIR env var > ./.ph/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.otp.validate()?;
        self.delivery.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Get absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  auth: HS256, token_ttl={}h, secret={}",
            self.auth.token_ttl_hours,
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            }
        );
        info!(
            "  otp: ttl={}s, codes={}-{}, purge={}s",
            self.otp.ttl_secs, self.otp.code_min, self.otp.code_max, self.otp.purge_interval_secs
        );
        info!(
            "  delivery: {} ({}s timeout)",
            self.delivery.mode.as_str(),
            self.delivery.timeout_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PH_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PH_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("PH_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("PH_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("PH_AUTH_TOKEN_TTL_HOURS", &mut self.auth.token_ttl_hours);

        // OTP
        Self::apply_env_option_string("PH_OTP_HASH_SECRET", &mut self.otp.hash_secret);
        Self::apply_env_parse("PH_OTP_TTL_SECS", &mut self.otp.ttl_secs);
        Self::apply_env_parse("PH_OTP_CODE_MIN", &mut self.otp.code_min);
        Self::apply_env_parse("PH_OTP_CODE_MAX", &mut self.otp.code_max);
        Self::apply_env_parse(
            "PH_OTP_PURGE_INTERVAL_SECS",
            &mut self.otp.purge_interval_secs,
        );

        // Delivery
        Self::apply_env_parse("PH_DELIVERY_MODE", &mut self.delivery.mode);
        Self::apply_env_option_string("PH_DELIVERY_WEBHOOK_URL", &mut self.delivery.webhook_url);
        Self::apply_env_option_string("PH_DELIVERY_API_KEY", &mut self.delivery.api_key);
        Self::apply_env_parse("PH_DELIVERY_TIMEOUT_SECS", &mut self.delivery.timeout_secs);

        // Logging
        Self::apply_env_parse("PH_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PH_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PH_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
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
