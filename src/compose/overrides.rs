//! Consumer override layering.
//!
//! Projects extend the composed config by shallow-merging partial maps
//! onto any category: added keys land beside the composed ones, same-name
//! keys replace values, and no composed key is ever removed.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TailorError};

use super::ThemeExtend;

/// Partial per-category maps loaded from an overrides file (YAML or JSON).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Overrides {
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

impl Overrides {
    /// Load overrides from a file, dispatching on the extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TailorError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read overrides file: {}", e),
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::parse_json(&content),
            _ => Self::parse_yaml(&content),
        }
    }

    /// Parse overrides from a YAML string.
    pub fn parse_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| TailorError::Parse {
            message: format!("Invalid overrides: {}", e),
            help: Some("Overrides are flat key/value maps per category".to_string()),
        })
    }

    /// Parse overrides from a JSON string.
    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| TailorError::Parse {
            message: format!("Invalid overrides: {}", e),
            help: Some("Overrides are flat key/value maps per category".to_string()),
        })
    }

    /// Check if no category carries any override.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.font_size.is_empty()
            && self.font_weight.is_empty()
            && self.line_height.is_empty()
            && self.letter_spacing.is_empty()
            && self.spacing.is_empty()
            && self.border_radius.is_empty()
            && self.border_width.is_empty()
            && self.box_shadow.is_empty()
            && self.transition_duration.is_empty()
            && self.font_family.is_empty()
    }

    /// Shallow-merge these overrides onto a composed extend object.
    pub fn apply_to(&self, extend: &mut ThemeExtend) {
        merge(&mut extend.colors, &self.colors);
        merge(&mut extend.font_size, &self.font_size);
        merge(&mut extend.font_weight, &self.font_weight);
        merge(&mut extend.line_height, &self.line_height);
        merge(&mut extend.letter_spacing, &self.letter_spacing);
        merge(&mut extend.spacing, &self.spacing);
        merge(&mut extend.border_radius, &self.border_radius);
        merge(&mut extend.border_width, &self.border_width);
        merge(&mut extend.box_shadow, &self.box_shadow);
        merge(&mut extend.transition_duration, &self.transition_duration);
        merge(&mut extend.font_family, &self.font_family);
    }
}

/// Insert every source entry into the target, replacing same-name keys.
fn merge<V: Clone>(target: &mut IndexMap<String, V>, source: &IndexMap<String, V>) {
    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
}
