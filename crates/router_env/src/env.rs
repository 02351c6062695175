//!
//! Current environment related stuff.
//!

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Env variable that sets Development/Sandbox/Production env
pub const RUN_ENV: &str = "RUN_ENV";

/// Directory, relative to the current working directory, holding per environment config files
pub const CONFIG_DIR: &str = "config";

///
/// Environment the SDK runs against.
///
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Env {
    /// Development environment.
    #[default]
    Development,
    /// Sandbox environment, talks to gateway test endpoints.
    Sandbox,
    /// Production environment.
    Production,
}

impl Env {
    /// File name of the config file for this environment, e.g. `sandbox.toml`.
    pub fn config_file_name(self) -> String {
        format!("{}.toml", self.to_string().to_lowercase())
    }
}

/// Name of current environment, read from `RUN_ENV`.
///
/// Falls back to `Development` in debug builds and `Production` in release builds when the
/// variable is missing or holds an unknown name.
pub fn which() -> Env {
    #[cfg(debug_assertions)]
    let default_env = Env::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Env::Production;

    std::env::var(RUN_ENV).map_or_else(|_| default_env, |v| v.parse().unwrap_or(default_env))
}

/// Path of the config file for `env`, relative to the current working directory.
pub fn config_path(env: Env) -> PathBuf {
    let mut path = PathBuf::from(CONFIG_DIR);
    path.push(env.config_file_name());
    path
}
