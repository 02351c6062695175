//!
//! Settings of the payment builders, read from `config/<env>.toml` and `PAYMENT_SDK__*`
//! environment variables.
//!

use std::path::PathBuf;

use common_utils::{consts, errors::CustomResult};
use config::{Config, ConfigError, Environment, File};
use error_stack::report;
use router_env::{config::Log, env::Env};
use serde::Deserialize;

/// Top level settings.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
    /// Logger settings.
    pub log: Log,
    /// Executor registry settings.
    pub services: ServicesSettings,
}

/// Settings of the [`crate::services::ServicesContainer`].
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServicesSettings {
    /// Configuration name used when a request is executed without naming one.
    pub default_config_name: String,
}

impl Default for ServicesSettings {
    fn default() -> Self {
        Self {
            default_config_name: consts::DEFAULT_CONFIG_NAME.to_string(),
        }
    }
}

impl Settings {
    /// Loads settings for the environment named by `RUN_ENV`.
    pub fn new() -> CustomResult<Self, ConfigError> {
        Self::with_config_path(router_env::which(), None)
    }

    /// Loads settings from `config_path`, or from `config/<env>.toml` when no path is given.
    ///
    /// The file is optional; environment variables such as
    /// `PAYMENT_SDK__SERVICES__DEFAULT_CONFIG_NAME` override it.
    pub fn with_config_path(
        environment: Env,
        config_path: Option<PathBuf>,
    ) -> CustomResult<Self, ConfigError> {
        let config_path = config_path.unwrap_or_else(|| router_env::config_path(environment));

        let config = Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(
                Environment::with_prefix(consts::ENV_PREFIX)
                    .prefix_separator(consts::ENV_SEPARATOR)
                    .separator(consts::ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects settings no container could be built from.
    pub fn validate(&self) -> CustomResult<(), ConfigError> {
        if self.services.default_config_name.trim().is_empty() {
            return Err(report!(ConfigError::Message(
                "services.default_config_name must not be empty".to_string()
            )));
        }
        Ok(())
    }
}
