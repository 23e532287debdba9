use crate::models::{ManifestFields, ModSet};
use crate::report::{CheckKind, ValidationReport};
use indexmap::IndexMap;

/// Report every manifest whose mod identifier was already declared by an earlier one
pub fn check_duplicate_ids(mods: &ModSet, report: &mut ValidationReport) {
    check_unique(mods, CheckKind::DuplicateIds, "mod ID", mod_id, report);
}

/// Report every manifest whose target filename was already declared by an earlier one
pub fn check_duplicate_filenames(mods: &ModSet, report: &mut ValidationReport) {
    check_unique(mods, CheckKind::DuplicateFilenames, "filename", filename, report);
}

fn mod_id(fields: &ManifestFields) -> Option<&str> {
    fields.mod_id.as_deref()
}

fn filename(fields: &ManifestFields) -> Option<&str> {
    fields.filename.as_deref()
}

// The first file to declare a value owns it; every later one is reported against it.
fn check_unique(
    mods: &ModSet,
    check: CheckKind,
    label: &str,
    extract: fn(&ManifestFields) -> Option<&str>,
    report: &mut ValidationReport,
) {
    tracing::info!("{}", check.title());

    let mut owners: IndexMap<&str, &str> = IndexMap::new();
    let mut duplicates = 0usize;

    for manifest in mods.iter() {
        let Some(value) = extract(&manifest.fields) else {
            continue;
        };

        match owners.get(value) {
            Some(owner) => {
                duplicates += 1;
                report.error(
                    check,
                    format!(
                        "Duplicate {} '{}' in {} and {}",
                        label, value, owner, manifest.file_name
                    ),
                );
            }
            None => {
                owners.insert(value, manifest.file_name.as_str());
            }
        }
    }

    tracing::debug!(
        "{} distinct {} values, {} duplicates",
        owners.len(),
        label,
        duplicates
    );

    if !report.has_errors() {
        report.ok(
            check,
            format!("All {} mods have unique {}s", mods.len(), label),
        );
    }
}
