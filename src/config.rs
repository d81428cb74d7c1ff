//! Runtime configuration
//!
//! Built once at startup from command-line flags and their environment
//! variable fallbacks.

use crate::cli::EngineArgs;
use crate::error::AppError;
use std::time::Duration;
use url::Url;

/// Basic-auth credentials for engines with security enabled
#[derive(Debug, Clone, PartialEq)]
pub struct EngineCredentials {
    pub username: String,
    pub password: String,
}

/// Where and how to reach the search engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub url: Url,
    pub index: String,
    pub credentials: Option<EngineCredentials>,
    pub timeout: Option<Duration>,
}

impl EngineConfig {
    /// Validate engine flags into a config
    pub fn from_args(args: &EngineArgs) -> Result<Self, AppError> {
        let url = Url::parse(args.engine_url.trim())
            .map_err(|e| AppError::Config(format!("Invalid engine URL '{}': {}", args.engine_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "Engine URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        let index = args.index.trim().to_string();
        if index.is_empty() {
            return Err(AppError::Config("Index name cannot be empty".to_string()));
        }

        let credentials = match (&args.engine_username, &args.engine_password) {
            (Some(username), Some(password)) => Some(EngineCredentials {
                username: username.clone(),
                password: password.clone(),
            }),
            (None, None) => None,
            _ => {
                return Err(AppError::Config(
                    "Engine username and password must be given together".to_string(),
                ))
            }
        };

        Ok(Self {
            url,
            index,
            credentials,
            timeout: args.engine_timeout_secs.map(Duration::from_secs),
        })
    }
}
