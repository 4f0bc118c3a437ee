// Measurement Protocol Validator - Core Library
// Per-field validation of Google Analytics Measurement Protocol parameters

pub mod error;
pub mod iso4217;
pub mod rules;      // Rule primitives + compiled patterns
pub mod fields;     // Field catalog: is_<key> / validate_<key>
pub mod registry;   // Wire key resolution + parameter sets
pub mod config;

// Re-export commonly used types
pub use error::{ValidationError, ValidationResult};
pub use rules::{Pattern, Rule};
pub use fields::*;
pub use registry::FieldRegistry;
pub use config::{UnknownKeys, ValidatorConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
