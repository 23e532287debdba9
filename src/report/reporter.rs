use super::{CheckKind, Severity, ValidationReport};
use std::io::{IsTerminal, Write};

/// Suggested follow-up printed after a clean run
pub const NEXT_STEP: &str = "packwiz modrinth export";

/// Console renderer for a finished [`ValidationReport`]
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Colorize only when stdout is attached to a terminal
    pub fn for_stdout() -> Self {
        Self::new(std::io::stdout().is_terminal())
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Ok => "32",
            Severity::Warning => "33",
            Severity::Error => "31",
        }
    }

    /// Format a single tagged line
    pub fn line(&self, severity: Severity, message: &str) -> String {
        format!(
            "{} {}",
            self.colorize(severity.tag(), Self::severity_color(severity)),
            message
        )
    }

    /// Render all sections followed by the pass/fail summary
    pub fn render(&self, report: &ValidationReport) -> String {
        let mut output = String::new();

        for check in CheckKind::ALL {
            let mut entries = report.entries_for(check).peekable();
            if entries.peek().is_none() {
                continue;
            }

            output.push_str(&self.colorize(&format!("=== {} ===", check.title()), "1"));
            output.push('\n');
            for entry in entries {
                output.push_str(&self.line(entry.severity, &entry.message));
                output.push('\n');
            }
            output.push('\n');
        }

        let errors = report.count(Severity::Error);
        let warnings = report.count(Severity::Warning);

        if report.has_errors() {
            output.push_str(&self.colorize(
                &format!(
                    "Validation FAILED: {} error(s), {} warning(s). Fix the errors above before publishing.",
                    errors, warnings
                ),
                "31",
            ));
        } else {
            output.push_str(&self.colorize(
                &format!("All checks passed ({} warning(s)).", warnings),
                "32",
            ));
            output.push('\n');
            output.push_str(&format!("Next step: run `{}` to build the release.", NEXT_STEP));
        }
        output.push('\n');

        output
    }

    /// Write the rendered report to stdout
    pub fn print(&self, report: &ValidationReport) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = stdout.write_all(self.render(report).as_bytes()) {
            tracing::warn!("Failed to write report to stdout: {}", e);
        }
    }
}
