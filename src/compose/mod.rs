//! Configuration composition.
//!
//! The one active stage of the pipeline: project a `TokenSet` and a
//! `Theme` into the `theme.extend` object Tailwind expects, wrap it in the
//! full config envelope (content globs, dark mode), and let consumers
//! layer overrides on top.
//!
//! Composition is a pure function over its inputs. Nothing is cached:
//! token and theme data never change within a build, so the result is
//! recomputed fresh on every call and two calls with the same inputs are
//! deep-equal.

mod colours;
mod overrides;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TailorError};
use crate::types::{Theme, TokenSet};

pub use colours::flatten_colours;
pub use overrides::Overrides;

/// The composed `theme.extend` object.
///
/// Every category is a flat key -> value map, so consumers can shallow
/// merge extra keys onto any of them without knowing the full key set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtend {
    pub colors: IndexMap<String, String>,
    pub font_size: IndexMap<String, String>,
    pub font_weight: IndexMap<String, u16>,
    pub line_height: IndexMap<String, f64>,
    pub letter_spacing: IndexMap<String, String>,
    pub spacing: IndexMap<String, String>,
    pub border_radius: IndexMap<String, String>,
    pub border_width: IndexMap<String, String>,
    pub box_shadow: IndexMap<String, String>,
    pub transition_duration: IndexMap<String, String>,
    pub font_family: IndexMap<String, Vec<String>>,
}

/// The full Tailwind configuration envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailwindConfig {
    /// Source globs the build tool scans for class names.
    pub content: Vec<String>,

    #[serde(rename = "darkMode")]
    pub dark_mode: String,

    pub theme: ThemeSection,

    pub plugins: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSection {
    pub extend: ThemeExtend,
}

impl TailwindConfig {
    /// Wrap a composed extend object in the config envelope.
    pub fn new(content: Vec<String>, dark_mode: impl Into<String>, extend: ThemeExtend) -> Self {
        Self {
            content,
            dark_mode: dark_mode.into(),
            theme: ThemeSection { extend },
            plugins: vec![],
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| TailorError::Build {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }
}

/// Compose a `theme.extend` object from a token set and a theme.
///
/// Fails with `MissingKey` if the theme lacks a required colour role and
/// with `Parity` if its semantic categories disagree on sub-roles. Inputs
/// are never mutated; scales are copied verbatim.
pub fn compose(tokens: &TokenSet, theme: &Theme) -> Result<ThemeExtend> {
    let mut border_width = IndexMap::new();
    border_width.insert("DEFAULT".to_string(), tokens.border.width.clone());

    let mut transition_duration = IndexMap::new();
    transition_duration.insert("fast".to_string(), tokens.transitions.fast.clone());
    // Tailwind's bare `duration` utility reads DEFAULT
    transition_duration.insert("DEFAULT".to_string(), tokens.transitions.normal.clone());
    transition_duration.insert("slow".to_string(), tokens.transitions.slow.clone());

    Ok(ThemeExtend {
        colors: flatten_colours(&theme.colours)?,
        font_size: tokens.typography.sizes.clone(),
        font_weight: tokens.typography.weights.clone(),
        line_height: tokens.typography.line_height.clone(),
        letter_spacing: tokens.typography.letter_spacing.clone(),
        spacing: tokens.spacing.clone(),
        border_radius: tokens.radius.clone(),
        border_width,
        box_shadow: tokens.shadows.clone(),
        transition_duration,
        font_family: font_families(),
    })
}

/// The fixed font stacks. Not token-driven: the fallback chain is part of
/// the composer's contract with the build tool.
fn font_families() -> IndexMap<String, Vec<String>> {
    let mut families = IndexMap::new();
    families.insert(
        "sans".to_string(),
        vec![
            "Inter".to_string(),
            "system-ui".to_string(),
            "-apple-system".to_string(),
            "sans-serif".to_string(),
        ],
    );
    families.insert(
        "mono".to_string(),
        vec![
            "JetBrains Mono".to_string(),
            "Menlo".to_string(),
            "Monaco".to_string(),
            "monospace".to_string(),
        ],
    );
    families
}
