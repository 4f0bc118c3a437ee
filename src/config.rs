// ⚙️ Validator Config - how a parameter set is checked
// Loaded from JSON (file or string); every field has a default

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What to do with a parameter key no rule covers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownKeys {
    /// Report it as a ValidationError
    #[default]
    Reject,
    /// Skip it
    Ignore,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub unknown_keys: UnknownKeys,

    /// Stop at the first rejected parameter instead of collecting all of them
    pub fail_fast: bool,
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set unknown key policy
    pub fn with_unknown_keys(mut self, policy: UnknownKeys) -> Self {
        self.unknown_keys = policy;
        self
    }

    /// Builder: set fail-fast mode
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse validator config JSON")
    }

    /// Load config from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read validator config: {:?}", path.as_ref()))?;

        Self::from_json_str(&content)
    }
}

// ============================================================================
// TESTS
// ============================================================================
