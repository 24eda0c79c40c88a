//! Application Configuration
//!
//! Configuration for the Companies application layer.

use std::env;

use thiserror::Error;

use crate::domain::value_object::zip_policy::{UnknownZipPolicy, ZipPolicy};

/// Environment variable selecting the zip policy (`contains` / `exact`)
pub const ENV_ZIP_POLICY: &str = "COMPANY_ZIP_POLICY";

/// Environment variable toggling the rejection warning (`true` / `false`)
pub const ENV_LOG_REJECTIONS: &str = "COMPANY_LOG_REJECTIONS";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("COMPANY_ZIP_POLICY: {0}")]
    ZipPolicy(#[from] UnknownZipPolicy),

    #[error("{name}: expected 'true' or 'false', got '{value}'")]
    InvalidBool { name: &'static str, value: String },
}

/// Companies application configuration
#[derive(Debug, Clone)]
pub struct CompanyConfig {
    /// How zip codes are matched
    pub zip_policy: ZipPolicy,
    /// Emit a `warn` event for every rejected company
    pub log_rejections: bool,
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            zip_policy: ZipPolicy::Contains,
            log_rejections: true,
        }
    }
}

impl CompanyConfig {
    /// Config with whole-string zip matching
    pub fn strict() -> Self {
        Self {
            zip_policy: ZipPolicy::Exact,
            ..Default::default()
        }
    }

    /// Load from the process environment, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let zip_policy = match lookup(ENV_ZIP_POLICY) {
            Some(value) => value.parse()?,
            None => defaults.zip_policy,
        };

        let log_rejections = match lookup(ENV_LOG_REJECTIONS) {
            Some(value) => parse_bool(ENV_LOG_REJECTIONS, &value)?,
            None => defaults.log_rejections,
        };

        Ok(Self {
            zip_policy,
            log_rejections,
        })
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}
