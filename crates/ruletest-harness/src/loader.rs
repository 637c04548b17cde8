//! Fixture file discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use ruletest_core::{Result, RuletestError};
use walkdir::WalkDir;

use crate::case::TestFixtures;

/// Loader for fixture documents stored as JSON
pub struct FixtureLoader;

impl FixtureLoader {
    /// Parse a fixture document from a JSON string
    pub fn load_from_str(content: &str) -> Result<TestFixtures> {
        serde_json::from_str(content)
            .map_err(|e| RuletestError::fixture_error(format!("Invalid fixture JSON: {e}")))
    }

    /// Load a fixture document from a specific file
    pub fn load_from_file(path: &Path) -> Result<TestFixtures> {
        let content = fs::read_to_string(path).map_err(|e| {
            RuletestError::fixture_error(format!(
                "Cannot read fixture file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let fixtures = serde_json::from_str(&content).map_err(|e| {
            RuletestError::fixture_error(format!("Invalid JSON in '{}': {}", path.display(), e))
        })?;

        tracing::info!("Loaded fixtures from: {}", path.display());
        Ok(fixtures)
    }

    /// Collect every `.json` fixture file under a directory, sorted by path
    pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir) {
            let entry = entry.map_err(|e| {
                RuletestError::fixture_error(format!(
                    "Cannot walk fixture directory '{}': {}",
                    dir.display(),
                    e
                ))
            })?;
            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "json")
            {
                files.push(entry.into_path());
            }
        }
        files.sort();

        tracing::debug!(
            "Discovered {} fixture file(s) in {}",
            files.len(),
            dir.display()
        );
        Ok(files)
    }
}
