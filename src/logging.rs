use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Setup diagnostic logging on stderr.
///
/// The report itself goes to stdout; tracing output stays on stderr so the two
/// never interleave in a captured report.
///
/// # Arguments
/// * `directive` - Filter directive (e.g., "warn", "packcheck=debug")
pub fn setup_logging(directive: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(directive)
        .with_context(|| format!("Invalid log filter: {}", directive))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!("Logging initialized: filter={}", directive);

    Ok(())
}
