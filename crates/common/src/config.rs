//! Project configuration loading
//!
//! Reads the serverless-style YAML project file that names the service, the
//! deployment stage and region, and the custom documentation variables the
//! version fix draws from.

use crate::{DownloadError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root of the project configuration file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectConfig {
    /// Service name, the first half of the deployed stack name
    pub service: String,

    /// Provider deployment settings
    pub provider: ProviderSettings,

    /// Custom variables; only the documentation block is read here
    #[serde(default)]
    pub custom: CustomVars,
}

/// Stage and region the service is deployed to
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderSettings {
    pub stage: String,
    pub region: String,
}

/// Custom variables block
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CustomVars {
    #[serde(default)]
    pub documentation: Option<DocumentationConfig>,
}

/// Documentation custom variables
///
/// The configured API version may live under `info` or under `api`,
/// depending on how the project declares its documentation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DocumentationConfig {
    #[serde(default)]
    pub info: Option<DocumentationSection>,

    #[serde(default)]
    pub api: Option<DocumentationSection>,
}

/// `info` or `api` block inside the documentation variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DocumentationSection {
    #[serde(default)]
    pub version: Option<String>,
}

impl ProjectConfig {
    /// Load project configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            DownloadError::Parse(format!(
                "Failed to read project config {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            DownloadError::Parse(format!(
                "Failed to parse project config {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Name of the deployed stack, composed as `{service}-{stage}`
    pub fn stack_name(&self) -> String {
        format!("{}-{}", self.service, self.provider.stage)
    }
}

impl DocumentationConfig {
    /// Configured API version, checking `info.version` then `api.version`
    pub fn resolved_version(&self) -> Option<&str> {
        self.info
            .as_ref()
            .and_then(|section| section.version.as_deref())
            .or_else(|| {
                self.api
                    .as_ref()
                    .and_then(|section| section.version.as_deref())
            })
    }
}
