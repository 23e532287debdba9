// Report module
//
// This module provides the ValidationReport that every check appends to, and the
// Reporter that renders it to the console once the checklist has finished.

pub mod reporter;

pub use reporter::Reporter;

/// Severity of a single report entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Ok,
    Warning,
    Error,
}

impl Severity {
    /// Console tag printed in front of each line
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Ok => "[OK]",
            Severity::Warning => "[WARN]",
            Severity::Error => "[ERROR]",
        }
    }
}

/// The check that produced an entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CheckKind {
    DuplicateIds,
    DuplicateFilenames,
    IndexRefresh,
    IndexConsistency,
    Incompatibilities,
    UrlReachability,
}

impl CheckKind {
    /// Checklist order
    pub const ALL: [CheckKind; 6] = [
        CheckKind::DuplicateIds,
        CheckKind::DuplicateFilenames,
        CheckKind::IndexRefresh,
        CheckKind::IndexConsistency,
        CheckKind::Incompatibilities,
        CheckKind::UrlReachability,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CheckKind::DuplicateIds => "Checking for duplicate mod IDs",
            CheckKind::DuplicateFilenames => "Checking for duplicate filenames",
            CheckKind::IndexRefresh => "Refreshing index",
            CheckKind::IndexConsistency => "Checking index consistency",
            CheckKind::Incompatibilities => "Checking for known incompatibilities",
            CheckKind::UrlReachability => "Spot-checking download URLs",
        }
    }
}

/// A single emitted message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportEntry {
    pub check: CheckKind,
    pub severity: Severity,
    pub message: String,
}

/// Accumulated result of a validation run.
///
/// Entries are append-only and the error flag, once set, is never cleared.
#[derive(Clone, Debug, Default)]
pub struct ValidationReport {
    has_errors: bool,
    entries: Vec<ReportEntry>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(&mut self, check: CheckKind, message: impl Into<String>) {
        self.push(check, Severity::Ok, message.into());
    }

    pub fn warn(&mut self, check: CheckKind, message: impl Into<String>) {
        self.push(check, Severity::Warning, message.into());
    }

    pub fn error(&mut self, check: CheckKind, message: impl Into<String>) {
        self.has_errors = true;
        self.push(check, Severity::Error, message.into());
    }

    fn push(&mut self, check: CheckKind, severity: Severity, message: String) {
        tracing::debug!(?check, ?severity, "{}", message);
        self.entries.push(ReportEntry {
            check,
            severity,
            message,
        });
    }

    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Entries produced by one check, in emission order
    pub fn entries_for(&self, check: CheckKind) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(move |e| e.check == check)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.entries.iter().filter(|e| e.severity == severity).count()
    }

    pub fn count_for(&self, check: CheckKind, severity: Severity) -> usize {
        self.entries_for(check)
            .filter(|e| e.severity == severity)
            .count()
    }

    /// Process exit status: 0 when no check emitted an error, 1 otherwise
    pub fn exit_status(&self) -> u8 {
        if self.has_errors { 1 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_clean() {
        let report = ValidationReport::new();
        assert!(!report.has_errors());
        assert!(report.entries().is_empty());
        assert_eq!(report.exit_status(), 0);
    }

    #[test]
    fn test_error_flag_is_sticky() {
        let mut report = ValidationReport::new();
        report.error(CheckKind::DuplicateIds, "duplicate");
        report.ok(CheckKind::IndexRefresh, "refreshed");
        report.ok(CheckKind::Incompatibilities, "done");

        assert!(report.has_errors());
        assert_eq!(report.exit_status(), 1);
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut report = ValidationReport::new();
        report.warn(CheckKind::Incompatibilities, "sodium + optifine");
        report.warn(CheckKind::Incompatibilities, "iris + optifine");

        assert!(!report.has_errors());
        assert_eq!(report.count(Severity::Warning), 2);
        assert_eq!(report.exit_status(), 0);
    }

    #[test]
    fn test_counts_per_check() {
        let mut report = ValidationReport::new();
        report.error(CheckKind::DuplicateFilenames, "a");
        report.ok(CheckKind::IndexRefresh, "b");
        report.error(CheckKind::UrlReachability, "c");

        assert_eq!(report.count_for(CheckKind::DuplicateFilenames, Severity::Error), 1);
        assert_eq!(report.count_for(CheckKind::DuplicateIds, Severity::Error), 0);
        assert_eq!(report.count(Severity::Error), 2);
        assert_eq!(report.entries_for(CheckKind::IndexRefresh).count(), 1);
    }

    #[test]
    fn test_severity_tags() {
        assert_eq!(Severity::Ok.tag(), "[OK]");
        assert_eq!(Severity::Warning.tag(), "[WARN]");
        assert_eq!(Severity::Error.tag(), "[ERROR]");
    }
}
