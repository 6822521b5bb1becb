//! Configuration loader implementation

use crate::schema::Config;
use crate::validation::ConfigValidator;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use std::path::Path;
use types::ConfigError;

/// Prefix for environment overrides, e.g. `RELAY_KIT_RELAY__RELAY_URL`
pub const ENV_PREFIX: &str = "RELAY_KIT_";

/// Raw environment variable accepted for the auth key
pub const AUTH_KEY_ENV: &str = "FLASHBOTS_AUTH_KEY";

/// Configuration loader that handles YAML files and environment variables
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file and environment variables
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Config> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            return Err(ConfigError::FileNotFound {
                path: config_path.display().to_string(),
            }
            .into());
        }

        let config: Config = Self::with_env(Self::defaults().merge(Yaml::file(config_path)))
            .extract()
            .context("Failed to parse configuration")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from defaults and environment variables only
    pub fn load_from_env() -> Result<Config> {
        let config: Config = Self::with_env(Self::defaults())
            .extract()
            .context("Failed to parse configuration from environment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from string (for testing)
    pub fn load_from_str(yaml_content: &str) -> Result<Config> {
        let config: Config = Self::defaults()
            .merge(Yaml::string(yaml_content))
            .extract()
            .context("Failed to parse configuration from string")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Create example configuration file
    pub fn create_example<P: AsRef<Path>>(path: P) -> Result<()> {
        let yaml_content = serde_yaml::to_string(&Config::default())
            .context("Failed to serialize default configuration")?;

        std::fs::write(path.as_ref(), yaml_content)
            .context("Failed to write example configuration file")?;

        Ok(())
    }

    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
    }

    fn with_env(figment: Figment) -> Figment {
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Env::raw().only(&[AUTH_KEY_ENV]).map(|_| "signer.private_key".into()))
    }

    fn validate(config: &Config) -> Result<()> {
        let report = ConfigValidator::validate(config);

        for warning in &report.warnings {
            tracing::warn!(field = %warning.field, "{}", warning.message);
        }

        if let Some(error) = report.errors.first() {
            return Err(ConfigError::ValidationError {
                field: error.field.clone(),
                message: error.message.clone(),
            }
            .into());
        }

        Ok(())
    }
}
