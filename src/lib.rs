// packcheck - Pre-publish validation for packwiz modpacks
//
// This is the library crate containing the checks and data structures.
// The binary crate (main.rs) runs the checklist against the working directory.

pub mod logging;
pub mod models;
pub mod report;
pub mod services;
pub mod validator;

// Re-export commonly used types for convenience
pub use models::{IncompatibilityRule, ManifestFields, ManifestFile, ModSet, ValidatorConfig};
pub use report::{CheckKind, Reporter, Severity, ValidationReport};
pub use validator::Validator;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
