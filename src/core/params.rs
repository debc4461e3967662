//! Provisioning parameters and feature flags

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Default project name offered by the prompts
pub const DEFAULT_PROJECT_NAME: &str = "my-claude-app";

/// Default component name offered by the prompts
pub const DEFAULT_COMPONENT_NAME: &str = "MyComponent";

/// Optional features that add steps or change generated templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    /// Install lucide-react and use its icons in the main component
    Icons,
}

impl Feature {
    /// Every known feature, in prompt order
    pub const ALL: [Feature; 1] = [Feature::Icons];

    /// Stable name, used as the question key and in config files
    pub fn name(self) -> &'static str {
        match self {
            Feature::Icons => "icons",
        }
    }

    /// Yes/no question asked when the feature was not chosen up front
    pub fn question(self) -> &'static str {
        match self {
            Feature::Icons => "Would you like to install and use lucide-react icons?",
        }
    }

    pub fn from_name(name: &str) -> Option<Feature> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of enabled features
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureFlags(BTreeSet<Feature>);

impl FeatureFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, feature: Feature) -> Self {
        self.0.insert(feature);
        self
    }

    pub fn enable(&mut self, feature: Feature) {
        self.0.insert(feature);
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.0.contains(&feature)
    }

    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Feature> for FeatureFlags {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Everything a provisioning run needs from the user
///
/// Built once before the pipeline starts and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningParameters {
    project_name: String,
    component_name: String,
    features: FeatureFlags,
    verbose: bool,
}

impl ProvisioningParameters {
    pub fn new(
        project_name: impl Into<String>,
        component_name: impl Into<String>,
        features: FeatureFlags,
        verbose: bool,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            component_name: component_name.into(),
            features,
            verbose,
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    pub fn features(&self) -> &FeatureFlags {
        &self.features
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.features.is_enabled(feature)
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Default for ProvisioningParameters {
    fn default() -> Self {
        Self::new(
            DEFAULT_PROJECT_NAME,
            DEFAULT_COMPONENT_NAME,
            FeatureFlags::new(),
            false,
        )
    }
}
