//! Runtime configuration assembled with figment.
//!
//! Defaults are merged with an optional `wayfind.toml` file and `WAYFIND_*`
//! environment variables, in that order (later providers win).

use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "wayfind.toml";

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "WAYFIND_";

/// Server and loader configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the graph definition document served by the engine.
    pub graph_path: PathBuf,
    /// Pretty-print JSON answers instead of emitting one compact line each.
    pub pretty_answers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graph_path: PathBuf::from("graph.json"),
            pretty_answers: false,
        }
    }
}

impl Config {
    /// Loads configuration from defaults, `wayfind.toml`, and `WAYFIND_*`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a provider holds a malformed value.
    pub fn load() -> Result<Self> {
        Self::figment().extract().map_err(Into::into)
    }

    /// The provider stack backing [`Config::load`], exposed for tests.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}
