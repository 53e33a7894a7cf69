//! Project manifest (tailor.yaml) parsing.
//!
//! The manifest defines project configuration: the content globs handed
//! through to the build tool, which token and theme definitions to use,
//! an optional overrides file, and where to write the composed config.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TailorError};

/// Project manifest loaded from tailor.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source globs the build tool scans for utility class names.
    #[serde(default = "default_content")]
    pub content: Vec<String>,

    /// Dark-mode strategy passed through to the build tool.
    #[serde(default = "default_dark_mode")]
    pub dark_mode: String,

    /// Path to a token definition file. Defaults to the builtin token set.
    #[serde(default)]
    pub tokens: Option<PathBuf>,

    /// Theme to compose: a registered name or a path to a theme file.
    #[serde(default)]
    pub theme: Option<String>,

    /// Path to a per-project overrides file.
    #[serde(default)]
    pub overrides: Option<PathBuf>,

    /// Where to write the composed configuration.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_content() -> Vec<String> {
    vec![
        "./src/**/*.rs".to_string(),
        "./index.html".to_string(),
        "./templates/**/*.html".to_string(),
    ]
}

fn default_dark_mode() -> String {
    "class".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("tailwind.config.json")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            content: default_content(),
            dark_mode: default_dark_mode(),
            tokens: None,
            theme: None,
            overrides: None,
            output: default_output(),
        }
    }
}

impl Manifest {
    /// Load manifest from a tailor.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TailorError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| TailorError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check tailor.yaml syntax".to_string()),
        })
    }

    /// The theme to compose, defaulting to the builtin.
    pub fn effective_theme(&self) -> &str {
        self.theme.as_deref().unwrap_or("financial-dark")
    }
}
