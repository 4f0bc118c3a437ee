// ❌ Validation Error - one kind, many messages
// Every rejected parameter surfaces as a ValidationError naming the field

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A parameter value that does not satisfy its field's contract.
///
/// `field` is the key the caller validated against: the catalog key for the
/// `validate_*` functions (`"tid"`, `"pr[n]qt"`), or the concrete wire key
/// when going through [`FieldRegistry`](crate::FieldRegistry) (`"pr3qt"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Error for a wire key that no rule in the registry covers
    pub fn unknown_parameter(key: &str) -> Self {
        ValidationError::new(key, format!("Unknown parameter '{}'.", key))
    }
}

pub type ValidationResult = Result<(), ValidationError>;

// ============================================================================
// TESTS
// ============================================================================
