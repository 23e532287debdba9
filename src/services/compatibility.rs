use crate::models::{IncompatibilityRule, ModSet};
use crate::report::{CheckKind, ValidationReport};

/// Warn for every configured pair whose two mods are both installed.
///
/// Matching is case-insensitive on manifest base names. Findings are warnings
/// only and never change the outcome of the run.
pub fn check_incompatibilities(
    mods: &ModSet,
    rules: &[IncompatibilityRule],
    report: &mut ValidationReport,
) {
    let check = CheckKind::Incompatibilities;
    tracing::info!("{}", check.title());

    let installed = mods.base_names();

    for rule in rules {
        let first = rule.first.to_lowercase();
        let second = rule.second.to_lowercase();

        if installed.contains(&first) && installed.contains(&second) {
            tracing::debug!("Incompatible mods installed together: {} + {}", first, second);
            report.warn(
                check,
                format!("{} and {} are known to conflict", rule.first, rule.second),
            );
        }
    }

    report.ok(check, "Compatibility check complete");
}
