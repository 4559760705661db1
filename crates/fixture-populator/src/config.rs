//! Populator configuration.

use serde::{Deserialize, Serialize};

use crate::defaults::DefaultValues;

/// Conventional mutator prefix.
pub const DEFAULT_SETTER_PREFIX: &str = "set";

/// Policy knobs of a populator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulatorConfig {
    /// Whether built-in defaults fill properties no override matches.
    pub use_default_suppliers: bool,
    /// Which built-in default family to install.
    pub default_values: DefaultValues,
    /// Mutator name prefix; empty means any one-argument method.
    pub setter_prefix: String,
    /// Seed for the random family. `None` draws from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for PopulatorConfig {
    fn default() -> Self {
        Self {
            use_default_suppliers: true,
            default_values: DefaultValues::Fixed,
            setter_prefix: DEFAULT_SETTER_PREFIX.to_string(),
            seed: None,
        }
    }
}

impl PopulatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_suppliers(mut self, enabled: bool) -> Self {
        self.use_default_suppliers = enabled;
        self
    }

    pub fn with_default_values(mut self, family: DefaultValues) -> Self {
        self.default_values = family;
        self
    }

    pub fn with_setter_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.setter_prefix = prefix.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
