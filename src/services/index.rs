use super::loader::count_archives;
use crate::models::{ModSet, ValidatorConfig};
use crate::report::{CheckKind, ValidationReport};
use regex::Regex;
use std::fs;

/// Reference counts found in the index text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexCounts {
    pub manifests: usize,
    pub archives: usize,
}

/// Counts mod references in `index.toml` without parsing it as a document.
///
/// # Fields
///
/// - `manifest_pattern`: quoted paths like `"mods/sodium.pw.toml"`
/// - `archive_pattern`: quoted paths like `"mods/custom-mod.jar"`
///
/// Both are anchored on the mods directory name so references to resource packs
/// or config files elsewhere in the pack are not counted, and neither descends into
/// subfolders, matching the non-recursive loader.
#[derive(Debug, Clone)]
pub struct IndexScanner {
    manifest_pattern: Regex,
    archive_pattern: Regex,
}

impl IndexScanner {
    pub fn new(mods_dir_name: &str) -> Self {
        let dir = regex::escape(mods_dir_name.trim_end_matches('/'));
        Self {
            manifest_pattern: Regex::new(&format!(r#""{}/[^"/\n]*\.pw\.toml""#, dir))
                .expect("Invalid manifest reference regex"),
            archive_pattern: Regex::new(&format!(r#""{}/[^"/\n]*\.jar""#, dir))
                .expect("Invalid archive reference regex"),
        }
    }

    pub fn count(&self, text: &str) -> IndexCounts {
        let counts = IndexCounts {
            manifests: self.manifest_pattern.find_iter(text).count(),
            archives: self.archive_pattern.find_iter(text).count(),
        };

        tracing::debug!(
            "Parsed index - manifests: {}, archives: {}",
            counts.manifests,
            counts.archives
        );

        counts
    }
}

/// Compare index references against the mods on disk.
///
/// The archive comparison only runs once the manifest counts agree; a manifest
/// mismatch is reported on its own.
pub fn check_index_consistency(
    mods: &ModSet,
    scanner: &IndexScanner,
    config: &ValidatorConfig,
    report: &mut ValidationReport,
) {
    let check = CheckKind::IndexConsistency;
    tracing::info!("{}", check.title());

    let index_path = config.index_path();
    let text = match fs::read_to_string(&index_path) {
        Ok(text) => text,
        Err(e) => {
            report.error(check, format!("Failed to read {}: {}", index_path, e));
            return;
        }
    };

    let counts = scanner.count(&text);

    if counts.manifests != mods.len() {
        report.error(
            check,
            format!(
                "{} references {} .pw.toml files but {}/ contains {}",
                config.index_file_name,
                counts.manifests,
                config.mods_dir_name,
                mods.len()
            ),
        );
        return;
    }

    let archives = match count_archives(&config.mods_dir()) {
        Ok(archives) => archives,
        Err(e) => {
            report.error(check, format!("Failed to count .jar files: {:#}", e));
            return;
        }
    };

    if counts.archives != archives {
        report.error(
            check,
            format!(
                "{} references {} .jar files but {}/ contains {}",
                config.index_file_name, counts.archives, config.mods_dir_name, archives
            ),
        );
        return;
    }

    report.ok(
        check,
        format!(
            "{} is consistent: {} mods ({} manifests, {} jars)",
            config.index_file_name,
            counts.manifests + counts.archives,
            counts.manifests,
            counts.archives
        ),
    );
}
