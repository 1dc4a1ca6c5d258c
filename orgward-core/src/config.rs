//! Configuration for the request boundary guard

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default header carrying the target organization id
pub const DEFAULT_ORGANIZATION_HEADER: &str = "x-organization-id";

/// Message used when a denial carries no reason
pub const DEFAULT_FORBIDDEN_MESSAGE: &str = "You do not have permission to perform this action";

/// Configuration for request boundary enforcement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Request header naming the organization a request acts on
    #[serde(default = "default_organization_header")]
    pub organization_header: String,

    /// Fallback message for forbidden responses
    #[serde(default = "default_forbidden_message")]
    pub forbidden_message: String,

    /// Whether denials are logged
    #[serde(default = "default_log_denials")]
    pub log_denials: bool,
}

fn default_organization_header() -> String {
    DEFAULT_ORGANIZATION_HEADER.to_string()
}

fn default_forbidden_message() -> String {
    DEFAULT_FORBIDDEN_MESSAGE.to_string()
}

fn default_log_denials() -> bool {
    true
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            organization_header: default_organization_header(),
            forbidden_message: default_forbidden_message(),
            log_denials: default_log_denials(),
        }
    }
}

impl GuardConfig {
    /// Set the organization header name
    pub fn with_organization_header(mut self, header: impl Into<String>) -> Self {
        self.organization_header = header.into();
        self
    }

    /// Set the fallback forbidden message
    pub fn with_forbidden_message(mut self, message: impl Into<String>) -> Self {
        self.forbidden_message = message.into();
        self
    }

    /// Check that required fields are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.organization_header.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "organization_header must not be empty".to_string(),
            ));
        }
        if !self
            .organization_header
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(ConfigError::Invalid(format!(
                "organization_header is not a valid header name: {}",
                self.organization_header
            )));
        }
        Ok(())
    }
}
