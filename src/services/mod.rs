//! Services module - the individual checks run against a modpack.
//!
//! Each check is a free function that takes the loaded [`ModSet`](crate::models::ModSet)
//! plus whatever collaborator it needs, and appends its findings to a
//! [`ValidationReport`](crate::report::ValidationReport). Checks never return errors:
//! every failure mode becomes a report entry, so one broken check cannot stop the
//! rest of the checklist.
//!
//! # Components
//!
//! - [`loader`]: Reads `*.pw.toml` manifests and counts `*.jar` archives in the mods directory.
//!   This is the only fallible step that aborts a run.
//! - [`duplicates`]: Identifier and filename uniqueness
//! - [`refresh`]: Regenerates `index.toml` through an injected [`CommandRunner`]
//! - [`index`]: Compares index references against the files on disk
//! - [`compatibility`]: Warns about known-conflicting mod pairs
//! - [`reachability`]: HEAD-requests a sample of download URLs
//!
//! # Collaborators
//!
//! The two nondeterministic dependencies sit behind traits so tests can replace them:
//! [`CommandRunner`] for the `packwiz` subprocess and [`Sampler`] for picking which
//! manifests get a network check.

pub mod compatibility;
pub mod duplicates;
pub mod index;
pub mod loader;
pub mod reachability;
pub mod refresh;

pub use compatibility::check_incompatibilities;
pub use duplicates::{check_duplicate_filenames, check_duplicate_ids};
pub use index::{IndexCounts, IndexScanner, check_index_consistency};
pub use loader::{ARCHIVE_SUFFIX, LoaderError, count_archives, load_mod_set};
pub use reachability::{OrderedSampler, RandomSampler, Sampler, UrlProber, check_urls};
pub use refresh::{CommandOutput, CommandRunner, RefreshError, TokioCommandRunner, refresh_index};
