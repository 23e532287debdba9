//! Loading the mod set from the pack's mods directory.
//!
//! Only regular files directly inside the directory are considered; the listing
//! does not recurse. Manifests are returned sorted by file name so that "first
//! declared" has a stable meaning across platforms.

use crate::models::{MANIFEST_SUFFIX, ManifestFile, ModSet};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use thiserror::Error;

/// File suffix of mods shipped as raw archives instead of manifests
pub const ARCHIVE_SUFFIX: &str = ".jar";

/// Errors that abort loading
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Mods directory not found: {0}")]
    MissingModsDir(Utf8PathBuf),
}

/// Read every manifest in `mods_dir`.
///
/// # Errors
///
/// Fails if the directory is missing or any entry cannot be read. The caller
/// treats this as fatal for the whole run.
pub fn load_mod_set(mods_dir: &Utf8Path) -> Result<ModSet> {
    let paths = list_files_with_suffix(mods_dir, MANIFEST_SUFFIX)?;

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read manifest: {}", path))?;
        files.push(ManifestFile::from_text(&path, content));
    }

    tracing::info!("Loaded {} manifests from {}", files.len(), mods_dir);
    Ok(ModSet::new(files))
}

/// Count raw `*.jar` archives sitting next to the manifests
pub fn count_archives(mods_dir: &Utf8Path) -> Result<usize> {
    let count = list_files_with_suffix(mods_dir, ARCHIVE_SUFFIX)?.len();
    tracing::debug!("Found {} raw archives in {}", count, mods_dir);
    Ok(count)
}

fn list_files_with_suffix(dir: &Utf8Path, suffix: &str) -> Result<Vec<Utf8PathBuf>> {
    if !dir.is_dir() {
        return Err(LoaderError::MissingModsDir(dir.to_path_buf()).into());
    }

    let entries = dir
        .read_dir_utf8()
        .with_context(|| format!("Failed to read mods directory: {}", dir))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat {}", entry.path()))?;

        if file_type.is_file() && entry.file_name().ends_with(suffix) {
            paths.push(entry.into_path());
        }
    }

    paths.sort();
    Ok(paths)
}
