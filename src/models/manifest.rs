use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeSet;
use toml::{Table, Value};

/// File suffix shared by every packwiz mod manifest
pub const MANIFEST_SUFFIX: &str = ".pw.toml";

/// Fields extracted from a manifest's text.
///
/// Every field is optional: a manifest that does not declare one is simply
/// treated as not having it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestFields {
    /// Modrinth `mod-id`, or the CurseForge `project-id` as decimal text
    pub mod_id: Option<String>,

    /// Target jar filename inside the installed pack
    pub filename: Option<String>,

    /// Direct download URL from the `[download]` table
    pub url: Option<String>,
}

impl ManifestFields {
    /// Extract fields from manifest text.
    ///
    /// Each field is looked up on its own, so a key with an unexpected type only
    /// hides that key. Text that is not valid TOML yields no fields rather than an error.
    pub fn parse(text: &str) -> Self {
        let table: Table = match text.parse() {
            Ok(table) => table,
            Err(e) => {
                tracing::debug!("Manifest is not valid TOML, treating fields as absent: {}", e);
                return Self::default();
            }
        };

        let modrinth_id = lookup(&table, &["update", "modrinth", "mod-id"]).and_then(as_text);
        let curseforge_id = lookup(&table, &["update", "curseforge", "project-id"]).and_then(as_text);

        Self {
            mod_id: modrinth_id.or(curseforge_id),
            filename: lookup(&table, &["filename"]).and_then(as_text),
            url: lookup(&table, &["download", "url"]).and_then(as_text),
        }
    }
}

fn lookup<'a>(table: &'a Table, keys: &[&str]) -> Option<&'a Value> {
    let (last, parents) = keys.split_last()?;
    let mut current = table;
    for key in parents {
        current = current.get(*key)?.as_table()?;
    }
    current.get(*last)
}

// Strings and integers are accepted; blank strings and any other type count as absent.
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        _ => None,
    }
}

/// A single mod descriptor read from disk
#[derive(Debug, Clone)]
pub struct ManifestFile {
    pub file_name: String,
    pub path: Utf8PathBuf,
    pub content: String,
    pub fields: ManifestFields,
}

impl ManifestFile {
    /// Build a manifest from its text, extracting fields immediately
    pub fn from_text(path: &Utf8Path, content: String) -> Self {
        let file_name = path.file_name().unwrap_or(path.as_str()).to_string();
        let fields = ManifestFields::parse(&content);

        Self {
            file_name,
            path: path.to_path_buf(),
            content,
            fields,
        }
    }

    /// Lower-cased file name without the manifest suffix (`Sodium.pw.toml` -> `sodium`)
    pub fn base_name(&self) -> String {
        let lower = self.file_name.to_lowercase();
        match lower.strip_suffix(MANIFEST_SUFFIX) {
            Some(stem) => stem.to_string(),
            None => lower,
        }
    }
}

/// The ordered, immutable collection of manifests found for a run
#[derive(Debug, Clone, Default)]
pub struct ModSet {
    files: Vec<ManifestFile>,
}

impl ModSet {
    pub fn new(files: Vec<ManifestFile>) -> Self {
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ManifestFile> {
        self.files.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ManifestFile> {
        self.files.iter()
    }

    /// Normalized base names, one per manifest
    pub fn base_names(&self) -> BTreeSet<String> {
        self.files.iter().map(ManifestFile::base_name).collect()
    }
}
