// 📚 Field Registry - wire key → rule
// Resolves concrete parameter names (including indexed families such as
// `pr3qt` or `cd12`) and validates whole parameter sets

use crate::config::{UnknownKeys, ValidatorConfig};
use crate::error::{ValidationError, ValidationResult};
use crate::fields::{self, FieldRule};
use crate::rules::compile;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::HashMap;

// ============================================================================
// INDEXED FAMILIES
// ============================================================================

/// Wire key shape → catalog key of the family rule
static FAMILIES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (compile(r"^pr[0-9]+pr$"), fields::PRODUCT_PRICE.key),
        (compile(r"^pr[0-9]+qt$"), fields::PRODUCT_QUANTITY.key),
        (compile(r"^pr[0-9]+ps$"), fields::PRODUCT_POSITION.key),
        (compile(r"^pr[0-9]+cm[0-9]+$"), fields::PRODUCT_CUSTOM_METRIC.key),
        (compile(r"^il[0-9]+pi[0-9]+ps$"), fields::PRODUCT_IMPRESSION_POSITION.key),
        (compile(r"^il[0-9]+pi[0-9]+pr$"), fields::PRODUCT_IMPRESSION_PRICE.key),
        (compile(r"^il[0-9]+pi[0-9]+cm[0-9]+$"), fields::PRODUCT_IMPRESSION_CUSTOM_METRIC.key),
        (compile(r"^cd[1-9][0-9]*$"), fields::CUSTOM_DIMENSION.key),
        (compile(r"^cm[1-9][0-9]*$"), fields::CUSTOM_METRIC.key),
    ]
});

// ============================================================================
// FIELD REGISTRY
// ============================================================================

/// Catalog of every field rule, addressable by wire key.
///
/// Exact keys win over families, so `cd` is the screen name and `cm` the
/// campaign medium while `cd4` / `cm4` are custom dimension / metric 4.
pub struct FieldRegistry {
    rules: HashMap<&'static str, FieldRule>,
    config: ValidatorConfig,
}

impl FieldRegistry {
    /// Create a registry with the full catalog and default config
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        let rules = fields::ALL_RULES
            .iter()
            .map(|rule| (rule.key, *rule))
            .collect();

        FieldRegistry { rules, config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Get rule by catalog key (`"tid"`, `"pr[n]qt"`)
    pub fn get(&self, key: &str) -> Option<&FieldRule> {
        self.rules.get(key)
    }

    /// Get the rule governing a concrete wire key (`"tid"`, `"pr3qt"`)
    pub fn resolve(&self, wire_key: &str) -> Option<&FieldRule> {
        if let Some(rule) = self.rules.get(wire_key) {
            return Some(rule);
        }

        FAMILIES
            .iter()
            .find(|(pattern, _)| pattern.is_match(wire_key))
            .and_then(|(_, key)| self.rules.get(key))
    }

    /// List all catalog keys, sorted
    pub fn list_keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self.rules.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.values()
    }

    pub fn count(&self) -> usize {
        self.rules.len()
    }

    pub fn is_valid_param(&self, wire_key: &str, value: &Value) -> bool {
        self.validate_param(wire_key, value).is_ok()
    }

    /// Validate one parameter; the error names `wire_key`, not the family key
    pub fn validate_param(&self, wire_key: &str, value: &Value) -> ValidationResult {
        match self.resolve(wire_key) {
            Some(rule) => rule.validate_as(wire_key, value),
            None => match self.config.unknown_keys {
                UnknownKeys::Reject => Err(ValidationError::unknown_parameter(wire_key)),
                UnknownKeys::Ignore => {
                    tracing::trace!(key = wire_key, "ignoring unknown parameter");
                    Ok(())
                }
            },
        }
    }

    /// Validate every parameter of a hit, in key order.
    ///
    /// Collects all errors unless the config asks to stop at the first one.
    pub fn validate_params(&self, params: &Map<String, Value>) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (key, value) in params {
            if let Err(err) = self.validate_param(key, value) {
                errors.push(err);
                if self.config.fail_fast {
                    break;
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(
                errors = errors.len(),
                params = params.len(),
                "parameter set failed validation"
            );
            Err(errors)
        }
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
