//! File discovery for tailor projects.
//!
//! Finds theme and token definition files in a project tree by filename
//! convention (`*.theme.yaml`, `*.tokens.yaml`), and locates the
//! `tailor.yaml` manifest.
//!
//! # Example
//!
//! ```ignore
//! use tailor::discovery::scan;
//!
//! let result = scan("./design")?;
//! println!("Found {} theme file(s)", result.themes.len());
//! ```

mod manifest;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, TailorError};
use crate::registry::ThemeRegistry;
use crate::types::Theme;

pub use manifest::Manifest;

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "tailor.yaml";

/// Definition files found in a project tree.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Theme definition files (`*.theme.yaml`).
    pub themes: Vec<PathBuf>,

    /// Token definition files (`*.tokens.yaml`).
    pub tokens: Vec<PathBuf>,
}

impl ScanResult {
    /// Total number of definition files found.
    pub fn total(&self) -> usize {
        self.themes.len() + self.tokens.len()
    }
}

/// Scan a directory tree for definition files.
///
/// Results are sorted by path so discovery order is stable across
/// platforms and filesystems.
pub fn scan(root: impl AsRef<Path>) -> Result<ScanResult> {
    let root = root.as_ref();
    if !root.exists() {
        return Err(TailorError::Io {
            path: root.to_path_buf(),
            message: "Directory does not exist".to_string(),
        });
    }

    let mut result = ScanResult::default();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| TailorError::Io {
            path: root.to_path_buf(),
            message: format!("Failed to walk directory: {}", e),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if name.ends_with(".theme.yaml") || name.ends_with(".theme.yml") {
            result.themes.push(entry.into_path());
        } else if name.ends_with(".tokens.yaml") || name.ends_with(".tokens.yml") {
            result.tokens.push(entry.into_path());
        }
    }

    result.themes.sort();
    result.tokens.sort();

    Ok(result)
}

/// Find the manifest in a project root, if present.
pub fn find_manifest(root: impl AsRef<Path>) -> Option<PathBuf> {
    let path = root.as_ref().join(MANIFEST_FILENAME);
    path.is_file().then_some(path)
}

/// Load every discovered theme file into a registry seeded with the
/// builtins. Later files shadow earlier ones with the same name.
pub fn load_registry(scan: &ScanResult) -> Result<ThemeRegistry> {
    let mut registry = ThemeRegistry::with_builtins();
    for path in &scan.themes {
        let theme = Theme::load(path)?;
        registry.insert(theme);
    }
    Ok(registry)
}
