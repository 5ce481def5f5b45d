//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field carries a serde default so an empty file (or no
//! file at all) yields a runnable configuration.

pub mod app;
pub mod logging;
pub mod secrets;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::app::{ServerConfig, UploadConfig};
pub use self::logging::LoggingConfig;
pub use self::secrets::{HashingConfig, MIN_LINK_BYTES, MIN_PASSWORD_BYTES, SecretsConfig};
pub use self::storage::StorageConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// files (default.toml + environment overlay + `LOCKDROP__*` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upload limits.
    #[serde(default)]
    pub upload: UploadConfig,
    /// Link and password generation settings.
    #[serde(default)]
    pub secrets: SecretsConfig,
    /// Password digest settings.
    #[serde(default)]
    pub hashing: HashingConfig,
    /// Blob storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the `config/` directory.
    ///
    /// Merges `config/default.toml` with the `config/{env}.toml` overlay and
    /// environment variables prefixed with `LOCKDROP__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config", env)
    }

    /// Load configuration from an explicit directory.
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("LOCKDROP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would weaken share secrets or disable the body cap.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.secrets.link_bytes < MIN_LINK_BYTES {
            return Err(AppError::configuration(format!(
                "secrets.link_bytes must be at least {MIN_LINK_BYTES}"
            )));
        }
        if self.secrets.password_bytes < MIN_PASSWORD_BYTES {
            return Err(AppError::configuration(format!(
                "secrets.password_bytes must be at least {MIN_PASSWORD_BYTES}"
            )));
        }
        if self.upload.max_body_bytes == 0 {
            return Err(AppError::configuration(
                "upload.max_body_bytes must be greater than zero",
            ));
        }
        if self.hashing.iterations == 0 || self.hashing.parallelism == 0 {
            return Err(AppError::configuration(
                "hashing.iterations and hashing.parallelism must be non-zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.upload.max_body_bytes, 16 * 1024 * 1024);
        assert_eq!(config.secrets.link_bytes, 16);
        assert_eq!(config.secrets.password_bytes, 8);
    }

    #[test]
    fn test_short_link_rejected() {
        let mut config = AppConfig::default();
        config.secrets.link_bytes = 8;
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("link_bytes"));
    }

    #[test]
    fn test_short_password_rejected() {
        let mut config = AppConfig::default();
        config.secrets.password_bytes = 4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_directory_uses_defaults() {
        let config = AppConfig::load_from("does/not/exist", "test").expect("defaults");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.provider, "local");
    }
}
