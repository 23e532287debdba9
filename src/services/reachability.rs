//! Download URL spot-checks.
//!
//! A handful of manifests is sampled per run and each sampled URL gets a single
//! HEAD request. Requests run one at a time with no retries; a failure on one
//! URL has no effect on the others.

use crate::models::ModSet;
use crate::report::{CheckKind, ValidationReport};
use rand::SeedableRng;
use rand::rngs::StdRng;
use reqwest::StatusCode;
use std::time::Duration;

const USER_AGENT_VALUE: &str = concat!("packcheck/", env!("CARGO_PKG_VERSION"));

/// Chooses which manifests get a network check
pub trait Sampler {
    /// Pick up to `amount` distinct indices in `0..len`
    fn pick(&mut self, len: usize, amount: usize) -> Vec<usize>;
}

/// Uniform sampling without replacement
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for RandomSampler {
    fn pick(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, len, amount.min(len)).into_vec()
    }
}

/// Deterministic sampler that takes the first `amount` manifests
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderedSampler;

impl Sampler for OrderedSampler {
    fn pick(&mut self, len: usize, amount: usize) -> Vec<usize> {
        (0..amount.min(len)).collect()
    }
}

/// Issues HEAD requests with a fixed per-request timeout
#[derive(Debug, Clone)]
pub struct UrlProber {
    client: reqwest::Client,
    timeout: Duration,
}

impl UrlProber {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT_VALUE)
            .build()?;

        Ok(Self { client, timeout })
    }

    pub async fn probe(&self, url: &str) -> Result<StatusCode, reqwest::Error> {
        tracing::debug!(url = %url, "HEAD");
        let response = self.client.head(url).send().await?;
        Ok(response.status())
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// HEAD-request the download URL of a sample of manifests
pub async fn check_urls(
    mods: &ModSet,
    sampler: &mut dyn Sampler,
    prober: &UrlProber,
    sample_size: usize,
    report: &mut ValidationReport,
) {
    let check = CheckKind::UrlReachability;
    tracing::info!("{}", check.title());

    if mods.is_empty() {
        report.ok(check, "No manifests to sample");
        return;
    }

    for index in sampler.pick(mods.len(), sample_size) {
        let Some(manifest) = mods.get(index) else {
            tracing::warn!("Sampler returned out-of-range index {}", index);
            continue;
        };
        let Some(url) = manifest.fields.url.as_deref() else {
            tracing::debug!("{} has no download URL, skipping", manifest.file_name);
            continue;
        };

        match prober.probe(url).await {
            Ok(status) if status.is_success() => {
                report.ok(check, format!("{}: {} ({})", manifest.file_name, url, status));
            }
            Ok(status) => {
                report.error(
                    check,
                    format!("{}: {} returned {}", manifest.file_name, url, status),
                );
            }
            Err(e) if e.is_timeout() => {
                report.error(
                    check,
                    format!(
                        "{}: {} timed out after {:?}",
                        manifest.file_name,
                        url,
                        prober.timeout()
                    ),
                );
            }
            Err(e) => {
                report.error(
                    check,
                    format!("{}: {} is unreachable: {}", manifest.file_name, url, e),
                );
            }
        }
    }
}
