//! packcheck - Pre-publish validation for packwiz modpacks
//!
//! Runs the validation checklist against the modpack in the current working
//! directory and exits with status 0 when no check reported an error, 1 otherwise.
//!
//! # Execution Flow
//!
//! 1. Initialize logging (stderr, warnings and above)
//! 2. Create a single-threaded tokio runtime for the subprocess and HTTP work
//! 3. Load `mods/*.pw.toml` and run the six checks in order
//! 4. Print the report to stdout and exit
//!
//! No configuration file, environment variables or command-line flags are read.

use anyhow::Result;
use packcheck::{APP_NAME, Reporter, Severity, VERSION, Validator, ValidatorConfig};
use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    packcheck::logging::setup_logging("warn")?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let reporter = Reporter::for_stdout();
    let config = ValidatorConfig::default();

    let outcome = runtime.block_on(async {
        let mut validator = Validator::new(config)?;
        validator.run().await
    });

    match outcome {
        Ok(report) => {
            reporter.print(&report);
            Ok(ExitCode::from(report.exit_status()))
        }
        Err(e) => {
            let stderr = Reporter::new(std::io::stderr().is_terminal());
            eprintln!("{}", stderr.line(Severity::Error, &format!("{:#}", e)));
            Ok(ExitCode::FAILURE)
        }
    }
}
