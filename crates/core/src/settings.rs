//! Client configuration

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

const ENV_PREFIX: &str = "LIVECONF";

/// Top-level client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// HTTP transport settings
    pub api: ApiSettings,

    /// Session persistence settings
    pub session: SessionSettings,

    /// Authentication endpoint paths
    pub endpoints: AuthEndpoints,

    /// Log level filter (e.g., "info", "debug")
    pub log_level: String,
}

/// HTTP transport settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApiSettings {
    /// API root every path is appended to; empty means same-origin relative
    pub base_url: String,

    /// Request timeout in seconds (ignored in the browser)
    pub timeout_secs: Option<u64>,

    /// User agent sent by native clients
    pub user_agent: Option<String>,
}

/// Session persistence settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Storage key holding the session token
    pub token_key: String,

    /// Lifetime of a persisted token in hours
    pub token_ttl_hours: u32,
}

/// Paths of the authentication endpoints, relative to the API root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthEndpoints {
    pub password_login: String,
    pub email_code_login: String,
    pub register: String,
    pub user_info: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            session: SessionSettings::default(),
            endpoints: AuthEndpoints::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            token_key: "token".to_string(),
            token_ttl_hours: 24,
        }
    }
}

impl Default for AuthEndpoints {
    fn default() -> Self {
        Self {
            password_login: "/user/login".to_string(),
            email_code_login: "/email_user/login".to_string(),
            register: "/email_user/register".to_string(),
            user_info: "/user/get_user_info".to_string(),
        }
    }
}

impl SessionSettings {
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(i64::from(self.token_ttl_hours))
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout_secs.map(std::time::Duration::from_secs)
    }
}

impl ClientSettings {
    /// Settings with the given API root and defaults elsewhere
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut settings = Self::default();
        settings.api.base_url = base_url.into();
        settings
    }

    /// Load configuration from file, overridden by `LIVECONF_*` variables
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting settings are invalid
    pub fn from_file<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration with defaults and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables cannot be parsed
    pub fn from_env() -> CoreResult<Self> {
        let settings = config::Config::builder().add_source(environment()).build()?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check invariants serde cannot express
    pub fn validate(&self) -> CoreResult<()> {
        if self.session.token_key.is_empty() {
            return Err(CoreError::invalid_config("session.token_key must not be empty"));
        }
        if self.session.token_ttl_hours == 0 {
            return Err(CoreError::invalid_config(
                "session.token_ttl_hours must be greater than zero",
            ));
        }
        for (name, path) in [
            ("password_login", &self.endpoints.password_login),
            ("email_code_login", &self.endpoints.email_code_login),
            ("register", &self.endpoints.register),
            ("user_info", &self.endpoints.user_info),
        ] {
            if !path.starts_with('/') {
                return Err(CoreError::invalid_config(format!(
                    "endpoints.{name} must start with '/', got '{path}'"
                )));
            }
        }
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}
