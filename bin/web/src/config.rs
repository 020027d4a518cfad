//! Centralized configuration.
//!
//! The static host reads [`ServerConfig`] from the environment via the
//! `config` crate. The browser bundle has no environment at runtime, so its
//! API location is fixed when the bundle is built.

use serde::Deserialize;
use staffdesk_client::ClientConfig;

/// Build-time override for the REST API base URL.
const API_URL: Option<&str> = option_env!("STAFFDESK_API_URL");

/// Returns the API client configuration baked into this build.
#[must_use]
pub fn client_config() -> ClientConfig {
    API_URL.map_or_else(ClientConfig::default, ClientConfig::new)
}

/// Static host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Directory holding the built site (`index.html` and `pkg/`).
    #[serde(default = "default_site_root")]
    pub site_root: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_site_root() -> String {
    "target/site".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            site_root: default_site_root(),
        }
    }
}

#[cfg(feature = "server")]
impl ServerConfig {
    /// Loads configuration from `STAFFDESK_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(
            config::Environment::with_prefix("STAFFDESK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
    }

    fn from_source(
        source: impl config::Source + Send + Sync + 'static,
    ) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_config_has_correct_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr, "127.0.0.1:3000");
        assert_eq!(config.site_root, "target/site");
    }

    #[test]
    fn client_config_follows_build_override() {
        let expected = API_URL.unwrap_or("http://localhost:8080/api");
        assert_eq!(client_config().base_url, expected);
    }

    #[cfg(feature = "server")]
    #[test]
    fn loads_from_environment_source() {
        use std::collections::HashMap;

        let env = HashMap::from([
            ("STAFFDESK_LISTEN_ADDR".to_string(), "0.0.0.0:8000".to_string()),
        ]);
        let config = ServerConfig::from_source(
            config::Environment::with_prefix("STAFFDESK")
                .prefix_separator("_")
                .separator("__")
                .source(Some(env)),
        )
        .expect("config loads");

        assert_eq!(config.listen_addr, "0.0.0.0:8000");
        assert_eq!(config.site_root, "target/site");
    }
}
