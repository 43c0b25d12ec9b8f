//! CLI configuration.
//!
//! Values come from the environment (a `.env` file is loaded first when
//! present) and command-line flags override them.
//!
//! | Variable                    | Default                 |
//! |-----------------------------|-------------------------|
//! | `INVOICEBLAZE_API_URL`      | `http://localhost:8000` |
//! | `INVOICEBLAZE_TIMEOUT_SECS` | `120`                   |

use reqwest::Url;
use std::env;
use std::time::Duration;

use invoiceblaze_workflow::{WorkflowTiming, API_URL_ENV, DEFAULT_API_URL};

use crate::error::{CliError, CliResult};

/// Environment variable for the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "INVOICEBLAZE_TIMEOUT_SECS";

/// Default request timeout. Large batches are processed inside one request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the processing service, without trailing slash
    pub api_url: String,
    /// Timeout of each HTTP request
    pub timeout: Duration,
    /// Delays of the simulated progress
    pub timing: WorkflowTiming,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            timing: WorkflowTiming::default(),
        }
    }
}

impl Config {
    /// Load from `.env` and the process environment.
    pub fn from_env() -> CliResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_vars(env::var(API_URL_ENV).ok(), env::var(TIMEOUT_ENV).ok())
    }

    /// Build from raw variable values. Empty values count as unset.
    pub fn from_vars(api_url: Option<String>, timeout_secs: Option<String>) -> CliResult<Self> {
        let mut config = Self::default();

        if let Some(url) = api_url.filter(|v| !v.trim().is_empty()) {
            config = config.with_api_url(&url)?;
        }

        if let Some(raw) = timeout_secs.filter(|v| !v.trim().is_empty()) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| CliError::Config(format!("{} must be a number of seconds, got '{}'", TIMEOUT_ENV, raw)))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Replace the API base URL after validating it.
    pub fn with_api_url(mut self, url: &str) -> CliResult<Self> {
        let trimmed = url.trim();
        let parsed = Url::parse(trimmed).map_err(|e| CliError::Config(format!("invalid API URL '{}': {}", trimmed, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CliError::Config(format!("API URL must use http or https, got '{}'", trimmed)));
        }
        self.api_url = trimmed.trim_end_matches('/').to_string();
        Ok(self)
    }
}
