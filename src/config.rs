//! Start-up configuration for the greeting function.
//!
//! The only tunable read from the environment is the optional CORS origin.
//! The default name is fixed.

use crate::models::AppError;

/// Name used when the request carries none
pub const DEFAULT_NAME: &str = "Serverless Öğrenci";

/// Environment variable holding the `Access-Control-Allow-Origin` value
pub const CORS_ALLOW_ORIGIN_VAR: &str = "CORS_ALLOW_ORIGIN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingConfig {
    pub default_name: String,
    pub cors_allow_origin: Option<String>,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_NAME.to_string(),
            cors_allow_origin: None,
        }
    }
}

impl GreetingConfig {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `CORS_ALLOW_ORIGIN` is set but blank.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `CORS_ALLOW_ORIGIN` is set but blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cors_allow_origin = match lookup(CORS_ALLOW_ORIGIN_VAR) {
            Some(origin) if origin.trim().is_empty() => {
                return Err(AppError::Config(format!(
                    "{CORS_ALLOW_ORIGIN_VAR} is set but empty"
                )));
            }
            Some(origin) => Some(origin.trim().to_string()),
            None => None,
        };

        Ok(Self {
            cors_allow_origin,
            ..Self::default()
        })
    }
}
