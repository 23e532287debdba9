use camino::{Utf8Path, Utf8PathBuf};
use std::time::Duration;

/// Mod pairs known to conflict when both are installed.
///
/// Names are matched against manifest base names (`sodium.pw.toml` -> `sodium`).
pub const KNOWN_INCOMPATIBILITIES: &[(&str, &str)] = &[
    ("sodium", "optifine"),
    ("iris", "optifine"),
    ("optifabric", "sodium"),
    ("phosphor", "starlight"),
    ("embeddium", "rubidium"),
    ("oculus", "optifine"),
];

/// A pair of mods that should not ship together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompatibilityRule {
    pub first: String,
    pub second: String,
}

impl IncompatibilityRule {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// The built-in conflict list
    pub fn defaults() -> Vec<Self> {
        KNOWN_INCOMPATIBILITIES
            .iter()
            .map(|(first, second)| Self::new(*first, *second))
            .collect()
    }
}

/// Settings for a single validation run.
///
/// Nothing here is read from disk or the environment; the binary uses
/// [`ValidatorConfig::default`], tests point [`ValidatorConfig::for_pack_dir`]
/// at a fixture directory.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Pack root containing the index file and the mods directory
    pub pack_dir: Utf8PathBuf,

    pub mods_dir_name: String,
    pub index_file_name: String,

    /// Packaging tool used to regenerate the index
    pub packwiz_exe: String,
    pub refresh_args: Vec<String>,
    pub refresh_timeout: Duration,

    /// Number of manifests whose URLs are spot-checked
    pub url_sample_size: usize,
    pub url_timeout: Duration,

    pub incompatibilities: Vec<IncompatibilityRule>,
}

impl ValidatorConfig {
    pub fn for_pack_dir<P: AsRef<Utf8Path>>(pack_dir: P) -> Self {
        Self {
            pack_dir: pack_dir.as_ref().to_path_buf(),
            mods_dir_name: "mods".to_string(),
            index_file_name: "index.toml".to_string(),
            packwiz_exe: "packwiz".to_string(),
            refresh_args: vec!["refresh".to_string()],
            refresh_timeout: Duration::from_secs(120),
            url_sample_size: 3,
            url_timeout: Duration::from_secs(5),
            incompatibilities: IncompatibilityRule::defaults(),
        }
    }

    pub fn mods_dir(&self) -> Utf8PathBuf {
        self.pack_dir.join(&self.mods_dir_name)
    }

    pub fn index_path(&self) -> Utf8PathBuf {
        self.pack_dir.join(&self.index_file_name)
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::for_pack_dir(".")
    }
}
