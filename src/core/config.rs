//! Tool configuration from YAML
//!
//! The configuration file only changes the defaults offered by the prompts.
//! Every key is optional:
//!
//! ```yaml
//! defaults:
//!   project_name: my-claude-app
//!   component_name: MyComponent
//!   features: [icons]
//! ```

use crate::core::params::{FeatureFlags, DEFAULT_COMPONENT_NAME, DEFAULT_PROJECT_NAME};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Defaults offered by the new-app prompts
    #[serde(default)]
    pub defaults: Defaults,
}

/// Prompt defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub project_name: String,
    pub component_name: String,
    pub features: FeatureFlags,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            component_name: DEFAULT_COMPONENT_NAME.to_string(),
            features: FeatureFlags::new(),
        }
    }
}

impl ToolConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document is a valid, empty config
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ToolConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the built-in defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.defaults.project_name.trim().is_empty() {
            anyhow::bail!("defaults.project_name must not be empty");
        }
        if self.defaults.component_name.trim().is_empty() {
            anyhow::bail!("defaults.component_name must not be empty");
        }
        Ok(())
    }
}
