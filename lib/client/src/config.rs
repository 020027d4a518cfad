//! Client configuration.

use serde::Deserialize;

/// Where the REST API lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Joins an endpoint path onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(ClientConfig::default().base_url, "http://localhost:8080/api");
    }

    #[test]
    fn endpoint_joins_with_single_slash() {
        let config = ClientConfig::new("https://hr.example.com/api/");
        assert_eq!(
            config.endpoint("/auth/login"),
            "https://hr.example.com/api/auth/login"
        );
        assert_eq!(config.endpoint("me"), "https://hr.example.com/api/me");
    }

    #[test]
    fn deserializes_with_default() {
        let config: ClientConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config, ClientConfig::default());
    }
}
