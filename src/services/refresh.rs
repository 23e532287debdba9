use crate::models::ValidatorConfig;
use crate::report::{CheckKind, ValidationReport};
use async_trait::async_trait;
use camino::Utf8Path;
use std::process::Stdio;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;

/// Captured result of an external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub status: Option<i32>,

    /// stdout followed by stderr, lossily decoded
    pub output: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Errors that prevent a command from producing an exit status
#[derive(Error, Debug)]
pub enum RefreshError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

/// Runs an external program and reports how it finished.
///
/// The index refresh goes through this trait so tests never need a real
/// `packwiz` binary on the PATH.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn execute(
        &self,
        program: &str,
        args: &[String],
        working_dir: &Utf8Path,
        timeout_duration: Duration,
    ) -> Result<CommandOutput, RefreshError>;
}

/// [`CommandRunner`] backed by `tokio::process`
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn execute(
        &self,
        program: &str,
        args: &[String],
        working_dir: &Utf8Path,
        timeout_duration: Duration,
    ) -> Result<CommandOutput, RefreshError> {
        tracing::info!("Executing: {} {}", program, args.join(" "));

        let start = Instant::now();

        let mut cmd = Command::new(program);
        cmd.args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = timeout(timeout_duration, cmd.output())
            .await
            .map_err(|_| {
                tracing::warn!("{} timed out after {:?}", program, timeout_duration);
                RefreshError::Timeout(timeout_duration)
            })?
            .map_err(|source| RefreshError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        let status = output.status.code();
        tracing::info!(
            "{} completed in {:.2}s with exit code {:?}",
            program,
            start.elapsed().as_secs_f32(),
            status
        );

        Ok(CommandOutput {
            status,
            output: combined,
        })
    }
}

/// Regenerate the index with the packaging tool.
///
/// This rewrites `index.toml` in place, so it must run before the consistency check
/// reads it. Failures are reported; they never stop the remaining checks.
pub async fn refresh_index(
    runner: &dyn CommandRunner,
    config: &ValidatorConfig,
    report: &mut ValidationReport,
) {
    let check = CheckKind::IndexRefresh;
    tracing::info!("{}", check.title());

    let invocation = format!("{} {}", config.packwiz_exe, config.refresh_args.join(" "));

    match runner
        .execute(
            &config.packwiz_exe,
            &config.refresh_args,
            &config.pack_dir,
            config.refresh_timeout,
        )
        .await
    {
        Ok(result) if result.success() => {
            report.ok(check, format!("`{}` succeeded", invocation));
        }
        Ok(result) => {
            let status = result
                .status
                .map_or_else(|| "terminated by signal".to_string(), |code| format!("exit code {}", code));
            report.error(
                check,
                format!(
                    "`{}` failed ({}):\n{}",
                    invocation,
                    status,
                    result.output.trim_end()
                ),
            );
        }
        Err(e) => {
            report.error(check, format!("`{}` could not complete: {}", invocation, e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;

    #[test]
    fn test_command_output_success() {
        let ok = CommandOutput {
            status: Some(0),
            output: String::new(),
        };
        let failed = CommandOutput {
            status: Some(1),
            output: String::new(),
        };
        let killed = CommandOutput {
            status: None,
            output: String::new(),
        };

        assert!(ok.success());
        assert!(!failed.success());
        assert!(!killed.success());
    }

    #[tokio::test]
    async fn test_refresh_success() {
        let config = ValidatorConfig::for_pack_dir("/packs/demo");
        let mut runner = MockCommandRunner::new();
        runner
            .expect_execute()
            .withf(|program, args, dir, _| {
                let program: &str = program;
                let args: &[String] = args;
                let dir: &Utf8Path = dir;
                program == "packwiz" && args == ["refresh"] && dir.as_str() == "/packs/demo"
            })
            .times(1)
            .returning(|_, _, _, _| {
                Ok(CommandOutput {
                    status: Some(0),
                    output: "Index refreshed!\n".to_string(),
                })
            });

        let mut report = ValidationReport::new();
        refresh_index(&runner, &config, &mut report).await;

        assert!(!report.has_errors());
        assert_eq!(report.count_for(CheckKind::IndexRefresh, Severity::Ok), 1);
    }

    #[tokio::test]
    async fn test_refresh_failure_includes_output() {
        let config = ValidatorConfig::default();
        let mut runner = MockCommandRunner::new();
        runner.expect_execute().returning(|_, _, _, _| {
            Ok(CommandOutput {
                status: Some(1),
                output: "Failed to read pack.toml\n".to_string(),
            })
        });

        let mut report = ValidationReport::new();
        refresh_index(&runner, &config, &mut report).await;

        let entry = report.entries_for(CheckKind::IndexRefresh).next().unwrap();
        assert_eq!(entry.severity, Severity::Error);
        assert!(entry.message.contains("exit code 1"));
        assert!(entry.message.contains("Failed to read pack.toml"));
    }

    #[tokio::test]
    async fn test_refresh_spawn_error_is_reported() {
        let config = ValidatorConfig::default();
        let mut runner = MockCommandRunner::new();
        runner.expect_execute().returning(|program, _, _, _| {
            Err(RefreshError::Spawn {
                program: program.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            })
        });

        let mut report = ValidationReport::new();
        refresh_index(&runner, &config, &mut report).await;

        assert!(report.has_errors());
        let entry = report.entries_for(CheckKind::IndexRefresh).next().unwrap();
        assert!(entry.message.contains("Failed to run packwiz"));
    }

    #[tokio::test]
    async fn test_refresh_timeout_is_reported() {
        let config = ValidatorConfig::default();
        let mut runner = MockCommandRunner::new();
        runner
            .expect_execute()
            .returning(|_, _, _, t| Err(RefreshError::Timeout(t)));

        let mut report = ValidationReport::new();
        refresh_index(&runner, &config, &mut report).await;

        let entry = report.entries_for(CheckKind::IndexRefresh).next().unwrap();
        assert!(entry.message.contains("Timeout after"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_tokio_runner_captures_combined_output() {
        let runner = TokioCommandRunner;
        let args = vec!["-c".to_string(), "echo out; echo err 1>&2; exit 3".to_string()];

        let result = runner
            .execute("sh", &args, Utf8Path::new("."), Duration::from_secs(10))
            .await
            .unwrap();

        assert_eq!(result.status, Some(3));
        assert!(result.output.contains("out"));
        assert!(result.output.contains("err"));
    }

    #[tokio::test]
    async fn test_tokio_runner_missing_program() {
        let runner = TokioCommandRunner;
        let result = runner
            .execute(
                "packcheck-definitely-missing-binary",
                &[],
                Utf8Path::new("."),
                Duration::from_secs(5),
            )
            .await;

        assert!(matches!(result, Err(RefreshError::Spawn { .. })));
    }
}
