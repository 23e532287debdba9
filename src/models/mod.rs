//! Data models for packcheck.
//!
//! - [`ManifestFile`]: One `*.pw.toml` descriptor with its raw text and extracted [`ManifestFields`]
//! - [`ModSet`]: The manifests found in the mods directory, read once per run
//! - [`ValidatorConfig`]: Paths, tool invocation and limits for a run
//! - [`IncompatibilityRule`]: A pair of mods known to conflict when installed together

pub mod config;
pub mod manifest;

pub use config::{IncompatibilityRule, KNOWN_INCOMPATIBILITIES, ValidatorConfig};
pub use manifest::{MANIFEST_SUFFIX, ManifestFields, ManifestFile, ModSet};
