// Suite discovery and loading for the YAML case tables under tests/suites.
use std::fs;
use std::path::{Path, PathBuf};

use pqs::Grammar;
use serde::Deserialize;
use walkdir::WalkDir;

/// A single YAML case: an input and its expected classification.
#[derive(Debug, Deserialize)]
pub struct SuiteCase {
    pub name: String,
    pub input: String,
    #[serde(default)]
    pub grammar: Grammar,
    pub valid: bool,
    pub axiom: bool,
    pub theorem: bool,
    #[serde(default)]
    pub skip: bool,
}

pub const SUITE_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/suites");

/// Discovers all YAML files recursively under the given root directory.
pub fn discover_yaml_files<P: AsRef<Path>>(root: P) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().is_file()
                && e.path()
                    .extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Loads all cases from a YAML file, failing the test on unreadable input.
pub fn load_suite(path: &Path) -> Vec<SuiteCase> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    serde_yaml::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse YAML in {}: {}", path.display(), e))
}
