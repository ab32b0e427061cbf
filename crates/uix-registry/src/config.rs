//! Registry configuration, usually read from a `[registry]` TOML table.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How the registry treats export types that resolve to no handler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Reject the whole plugin, naming every unknown type.
    #[default]
    Strict,
    /// Log the unknown types and skip them.
    Lenient,
}

/// Construction-time settings for [`UiExports`](crate::UiExports).
///
/// ```toml
/// url_base_path = "/abc"
/// validation = "lenient"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Prefix prepended to navigation link URLs.
    pub url_base_path: String,
    /// Unknown export type policy.
    pub validation: Validation,
}

impl RegistryConfig {
    /// Config with the given base path and strict validation.
    pub fn new(url_base_path: impl Into<String>) -> Self {
        Self {
            url_base_path: url_base_path.into(),
            validation: Validation::Strict,
        }
    }

    /// Switch to lenient validation.
    pub fn lenient(mut self) -> Self {
        self.validation = Validation::Lenient;
        self
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
