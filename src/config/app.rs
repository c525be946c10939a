//! Application metadata.

use super::ConfigError;

const DEFAULT_ENV: &str = "local";

/// Application metadata the configuration is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    /// Application name, also the prefix of the cookie signing key.
    pub name: String,
    /// Deployment environment: "local", "unittest", "prod", ...
    pub env: String,
}

impl AppInfo {
    /// Creates metadata for the named application.
    ///
    /// The name must be non-empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::Validation("app name is required".into()));
        }

        Ok(Self {
            name,
            env: DEFAULT_ENV.to_string(),
        })
    }

    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.env = env.into();
        self
    }
}
