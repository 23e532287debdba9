//! The validation checklist.
//!
//! [`Validator::run`] loads the mod set once and then runs every check in a
//! fixed order, each appending to the same [`ValidationReport`]:
//!
//! 1. Duplicate mod IDs
//! 2. Duplicate filenames
//! 3. Index refresh (rewrites `index.toml`)
//! 4. Index consistency (reads the refreshed `index.toml`)
//! 5. Known incompatibilities (warnings only)
//! 6. Download URL spot-checks
//!
//! Every check runs regardless of earlier outcomes. The only failure that stops
//! the run is a mods directory that cannot be read.

use crate::models::ValidatorConfig;
use crate::report::ValidationReport;
use crate::services::{
    CommandRunner, IndexScanner, RandomSampler, Sampler, TokioCommandRunner, UrlProber,
    check_duplicate_filenames, check_duplicate_ids, check_incompatibilities,
    check_index_consistency, check_urls, load_mod_set, refresh_index,
};
use anyhow::{Context, Result};

pub struct Validator {
    config: ValidatorConfig,
    runner: Box<dyn CommandRunner>,
    sampler: Box<dyn Sampler>,
    prober: UrlProber,
    scanner: IndexScanner,
}

impl Validator {
    /// Create a validator with the real `packwiz` runner and random sampling
    pub fn new(config: ValidatorConfig) -> Result<Self> {
        let prober = UrlProber::new(config.url_timeout).context("Failed to create HTTP client")?;
        let scanner = IndexScanner::new(&config.mods_dir_name);

        Ok(Self {
            config,
            runner: Box::new(TokioCommandRunner),
            sampler: Box::new(RandomSampler::new()),
            prober,
            scanner,
        })
    }

    pub fn with_command_runner(mut self, runner: impl CommandRunner + 'static) -> Self {
        self.runner = Box::new(runner);
        self
    }

    pub fn with_sampler(mut self, sampler: impl Sampler + 'static) -> Self {
        self.sampler = Box::new(sampler);
        self
    }

    /// Run the full checklist.
    ///
    /// # Errors
    ///
    /// Only loading the mods directory can fail; every check failure is recorded
    /// in the returned report instead.
    pub async fn run(&mut self) -> Result<ValidationReport> {
        let mods = load_mod_set(&self.config.mods_dir())?;
        let mut report = ValidationReport::new();

        check_duplicate_ids(&mods, &mut report);
        check_duplicate_filenames(&mods, &mut report);
        refresh_index(self.runner.as_ref(), &self.config, &mut report).await;
        check_index_consistency(&mods, &self.scanner, &self.config, &mut report);
        check_incompatibilities(&mods, &self.config.incompatibilities, &mut report);
        check_urls(
            &mods,
            self.sampler.as_mut(),
            &self.prober,
            self.config.url_sample_size,
            &mut report,
        )
        .await;

        tracing::info!(
            "Validation finished with {} entries, errors: {}",
            report.entries().len(),
            report.has_errors()
        );

        Ok(report)
    }
}
