//! Token set: the visual language shared by every theme.
//!
//! Borders, radii, typography, spacing, shadows, and transition durations.
//! These change rarely; per-project tweaks belong in an overrides file, not
//! here. Colour roles live in [`Theme`](super::theme::Theme).

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TailorError};

/// Border tokens. The low opacity is the system's visual signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderTokens {
    /// Border width as a CSS length (always thin).
    pub width: String,
    pub style: BorderStyle,
    /// Opacity in [0, 1]. Consumed by components directly; the composed
    /// Tailwind config does not carry it.
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
}

/// Typography scales: sizes, weights, line heights, letter spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub sizes: IndexMap<String, String>,
    pub weights: IndexMap<String, u16>,
    pub line_height: IndexMap<String, f64>,
    pub letter_spacing: IndexMap<String, String>,
}

/// Transition duration tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transitions {
    pub fast: String,
    pub normal: String,
    pub slow: String,
}

/// The full visual language.
///
/// Scales preserve declaration order so the composed output is stable and
/// consumers see keys in the order they were authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSet {
    pub border: BorderTokens,
    pub radius: IndexMap<String, String>,
    pub typography: Typography,
    pub spacing: IndexMap<String, String>,
    pub shadows: IndexMap<String, String>,
    pub transitions: Transitions,
}

impl TokenSet {
    /// The builtin default token set.
    pub fn default_tokens() -> Self {
        Self {
            border: BorderTokens {
                width: "1px".to_string(),
                style: BorderStyle::Solid,
                opacity: 0.15,
            },
            radius: scale(&[
                ("none", "0"),
                ("sm", "4px"),
                ("md", "6px"),
                ("lg", "8px"),
                ("xl", "12px"),
                ("full", "9999px"),
            ]),
            typography: Typography {
                sizes: scale(&[
                    ("xs", "0.75rem"),
                    ("sm", "0.875rem"),
                    ("base", "1rem"),
                    ("lg", "1.125rem"),
                    ("xl", "1.25rem"),
                    ("2xl", "1.5rem"),
                    ("3xl", "1.875rem"),
                ]),
                weights: [
                    ("light", 300),
                    ("normal", 400),
                    ("medium", 500),
                    ("semibold", 600),
                    ("bold", 700),
                ]
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
                line_height: [("tight", 1.25), ("normal", 1.5), ("relaxed", 1.75)]
                    .iter()
                    .map(|(k, v)| (k.to_string(), *v))
                    .collect(),
                letter_spacing: scale(&[
                    ("tight", "-0.025em"),
                    ("normal", "0"),
                    ("wide", "0.025em"),
                ]),
            },
            spacing: scale(&[
                ("0", "0"),
                ("0.5", "0.125rem"),
                ("1", "0.25rem"),
                ("1.5", "0.375rem"),
                ("2", "0.5rem"),
                ("3", "0.75rem"),
                ("4", "1rem"),
                ("5", "1.25rem"),
                ("6", "1.5rem"),
                ("8", "2rem"),
                ("10", "2.5rem"),
                ("12", "3rem"),
                ("16", "4rem"),
            ]),
            shadows: scale(&[
                ("none", "none"),
                ("sm", "0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
                ("md", "0 4px 6px -1px rgba(0, 0, 0, 0.1)"),
                ("lg", "0 10px 15px -3px rgba(0, 0, 0, 0.1)"),
            ]),
            transitions: Transitions {
                fast: "150ms".to_string(),
                normal: "200ms".to_string(),
                slow: "300ms".to_string(),
            },
        }
    }

    /// Load a token set from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TailorError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read token file: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a token set from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| TailorError::Parse {
            message: format!("Invalid token set: {}", e),
            help: Some("Check the token file against the default token set layout".to_string()),
        })
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::default_tokens()
    }
}

/// Build an ordered string scale from literal pairs.
fn scale(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
