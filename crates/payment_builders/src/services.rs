//!
//! Executors that process built requests and the container they are registered in.
//!

use std::{collections::HashMap, fmt};

use common_enums::{TransactionModifier, TransactionType};
use common_utils::{
    consts,
    errors::{CustomResult, TransactionError},
};
use error_stack::report;
use router_env::logger;

use crate::{
    settings::ServicesSettings, transaction_builder::TransactionRequestBuilder, types,
    validations::Validations,
};

/// Gateway specific processing of a validated transaction request.
#[mockall::automock]
pub trait TransactionExecutor {
    /// Sends the request to the gateway and maps its response.
    fn process(
        &self,
        builder: &TransactionRequestBuilder,
    ) -> CustomResult<types::Transaction, TransactionError>;

    /// Whether this executor handles the given combination at all.
    fn supports(
        &self,
        _transaction_type: TransactionType,
        _modifier: TransactionModifier,
    ) -> bool {
        true
    }
}

/// Registry of executors keyed by configuration name, plus the rules run before any of them
/// sees a request.
pub struct ServicesContainer {
    executors: HashMap<String, Box<dyn TransactionExecutor>>,
    default_config_name: String,
    validations: Validations,
}

impl ServicesContainer {
    /// Empty container using [`consts::DEFAULT_CONFIG_NAME`] and the stock validations.
    pub fn new() -> Self {
        Self {
            executors: HashMap::new(),
            default_config_name: consts::DEFAULT_CONFIG_NAME.to_string(),
            validations: Validations::default(),
        }
    }

    /// Empty container taking its default configuration name from settings.
    pub fn from_settings(settings: &ServicesSettings) -> Self {
        Self {
            default_config_name: settings.default_config_name.clone(),
            ..Self::new()
        }
    }

    /// Replaces the rules run before execution.
    pub fn with_validations(mut self, validations: Validations) -> Self {
        self.validations = validations;
        self
    }

    /// Registers `executor` under `config_name`, replacing any executor already there.
    pub fn configure(
        &mut self,
        config_name: impl Into<String>,
        executor: Box<dyn TransactionExecutor>,
    ) -> &mut Self {
        let config_name = config_name.into();
        if self.executors.insert(config_name.clone(), executor).is_some() {
            logger::debug!(%config_name, "replaced configured executor");
        }
        self
    }

    /// Removes the executor registered under `config_name`, returning it.
    pub fn remove(&mut self, config_name: &str) -> Option<Box<dyn TransactionExecutor>> {
        self.executors.remove(config_name)
    }

    /// Looks up the executor registered under `config_name`.
    pub fn executor(
        &self,
        config_name: &str,
    ) -> CustomResult<&dyn TransactionExecutor, TransactionError> {
        self.executors
            .get(config_name)
            .map(|executor| executor.as_ref())
            .ok_or_else(|| {
                report!(TransactionError::Configuration {
                    config_name: config_name.to_string()
                })
            })
    }

    /// Whether an executor is registered under `config_name`.
    pub fn is_configured(&self, config_name: &str) -> bool {
        self.executors.contains_key(config_name)
    }

    /// Name used when a request is executed without naming a configuration.
    pub fn default_config_name(&self) -> &str {
        &self.default_config_name
    }

    /// Rules run before execution.
    pub fn validations(&self) -> &Validations {
        &self.validations
    }
}

impl Default for ServicesContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ServicesContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut config_names: Vec<&String> = self.executors.keys().collect();
        config_names.sort();
        f.debug_struct("ServicesContainer")
            .field("executors", &config_names)
            .field("default_config_name", &self.default_config_name)
            .field("validations", &self.validations)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn unknown_config_name_is_a_configuration_error() {
        let services = ServicesContainer::new();
        let error = services.executor("secondary").err().unwrap();

        assert_eq!(
            error.current_context(),
            &TransactionError::Configuration {
                config_name: "secondary".to_string()
            }
        );
    }

    #[test]
    fn configure_replace_and_remove() {
        let mut services = ServicesContainer::new();
        services
            .configure("default", Box::new(MockTransactionExecutor::new()))
            .configure("default", Box::new(MockTransactionExecutor::new()));

        assert!(services.is_configured("default"));
        assert!(format!("{services:?}").contains("[\"default\"]"));
        assert!(services.remove("default").is_some());
        assert!(!services.is_configured("default"));
        assert!(services.remove("default").is_none());
    }

    #[test]
    fn default_config_name_comes_from_settings() {
        let settings = ServicesSettings {
            default_config_name: "primary".to_string(),
        };
        let services = ServicesContainer::from_settings(&settings);

        assert_eq!(services.default_config_name(), "primary");
        assert_eq!(ServicesContainer::new().default_config_name(), "default");
    }
}
