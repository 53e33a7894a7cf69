//! Theme type: semantic colour roles for one stylistic variant.
//!
//! A theme maps colour roles (backgrounds, borders, text, financial
//! semantics, accent) to concrete CSS colour strings. Role groups are open
//! maps rather than closed structs: composition checks the required roles
//! itself, and any extra roles an author adds flatten through by the same
//! rules. The builtin `financial-dark` theme lives in the registry.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TailorError};

/// An ordered role -> colour-string map.
pub type RoleMap = IndexMap<String, String>;

/// Background roles every theme must define.
pub const BG_ROLES: &[&str] = &["primary", "secondary", "tertiary", "elevated", "input"];

/// Border roles every theme must define.
pub const BORDER_ROLES: &[&str] = &["subtle", "default", "emphasis"];

/// Text roles every theme must define.
pub const TEXT_ROLES: &[&str] = &["primary", "secondary", "tertiary", "muted"];

/// Semantic categories every theme must define.
pub const SEMANTIC_CATEGORIES: &[&str] = &["bullish", "bearish", "neutral", "warning"];

/// Sub-roles every semantic category must define.
pub const SEMANTIC_ROLES: &[&str] = &["DEFAULT", "light", "dark", "bg", "border"];

/// Accent roles every theme must define.
pub const ACCENT_ROLES: &[&str] = &["primary", "hover", "active", "light", "bg"];

/// The colour role groups of a theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColours {
    pub bg: RoleMap,
    pub border: RoleMap,
    pub text: RoleMap,
    /// Category -> sub-role -> colour. All categories must share one
    /// sub-role set (structural parity), so consumers can iterate them
    /// generically.
    pub semantic: IndexMap<String, RoleMap>,
    pub accent: RoleMap,
}

/// A complete theme definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Unique theme name, used for registry lookup and `--theme`.
    pub name: String,

    #[serde(rename = "colors")]
    pub colours: ThemeColours,
}

impl Theme {
    /// Load a theme from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TailorError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read theme file: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a theme from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| TailorError::Parse {
            message: format!("Invalid theme: {}", e),
            help: Some("Themes need a name and a colors block with bg, border, text, semantic, and accent groups".to_string()),
        })
    }

    /// The flat role groups, paired with their config key prefix.
    /// Semantic categories are not included; they flatten differently.
    pub fn flat_groups(&self) -> [(&'static str, &RoleMap); 3] {
        [
            ("bg", &self.colours.bg),
            ("border", &self.colours.border),
            ("text", &self.colours.text),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_theme_yaml() -> &'static str {
        r##"
name: test-dark
colors:
  bg:
    primary: "#0A0E27"
    secondary: "#141B34"
    tertiary: "#1E2846"
    elevated: "#252D47"
    input: "#1a1a1a"
  border:
    subtle: "#1E293B"
    default: "#334155"
    emphasis: "#475569"
  text:
    primary: "#F3F4F6"
    secondary: "#9CA3AF"
    tertiary: "#6B7280"
    muted: "#4B5563"
  semantic:
    bullish:
      DEFAULT: "#10B981"
      light: "#34D399"
      dark: "#059669"
      bg: "rgba(16, 185, 129, 0.1)"
      border: "rgba(16, 185, 129, 0.3)"
    bearish:
      DEFAULT: "#EF4444"
      light: "#F87171"
      dark: "#DC2626"
      bg: "rgba(239, 68, 68, 0.1)"
      border: "rgba(239, 68, 68, 0.3)"
    neutral:
      DEFAULT: "#3B82F6"
      light: "#60A5FA"
      dark: "#2563EB"
      bg: "rgba(59, 130, 246, 0.1)"
      border: "rgba(59, 130, 246, 0.3)"
    warning:
      DEFAULT: "#F59E0B"
      light: "#FBBF24"
      dark: "#D97706"
      bg: "rgba(245, 158, 11, 0.1)"
      border: "rgba(245, 158, 11, 0.3)"
  accent:
    primary: "#3B82F6"
    hover: "#2563EB"
    active: "#1D4ED8"
    light: "#60A5FA"
    bg: "rgba(59, 130, 246, 0.1)"
"##
    }

    #[test]
    fn test_parse_theme() {
        let theme = Theme::parse(minimal_theme_yaml()).unwrap();

        assert_eq!(theme.name, "test-dark");
        assert_eq!(
            theme.colours.bg.get("primary"),
            Some(&"#0A0E27".to_string())
        );
        assert_eq!(
            theme.colours.semantic["bullish"].get("DEFAULT"),
            Some(&"#10B981".to_string())
        );
        assert_eq!(
            theme.colours.accent.get("hover"),
            Some(&"#2563EB".to_string())
        );
    }

    #[test]
    fn test_parse_requires_name() {
        let yaml = "colors:\n  bg: {}\n  border: {}\n  text: {}\n  semantic: {}\n  accent: {}\n";
        assert!(Theme::parse(yaml).is_err());
    }

    #[test]
    fn test_parse_requires_colors_block() {
        assert!(Theme::parse("name: empty\n").is_err());
    }

    #[test]
    fn test_semantic_preserves_category_order() {
        let theme = Theme::parse(minimal_theme_yaml()).unwrap();
        let categories: Vec<&str> = theme.colours.semantic.keys().map(|s| s.as_str()).collect();

        assert_eq!(categories, vec!["bullish", "bearish", "neutral", "warning"]);
    }

    #[test]
    fn test_extra_roles_are_kept() {
        let with_role = minimal_theme_yaml().replace(
            "    hover: \"#2563EB\"",
            "    hover: \"#2563EB\"\n    muted: \"#1E40AF\"",
        );
        let theme = Theme::parse(&with_role).unwrap();

        assert_eq!(
            theme.colours.accent.get("muted"),
            Some(&"#1E40AF".to_string())
        );
    }

    #[test]
    fn test_flat_groups() {
        let theme = Theme::parse(minimal_theme_yaml()).unwrap();
        let groups = theme.flat_groups();

        assert_eq!(groups[0].0, "bg");
        assert_eq!(groups[1].0, "border");
        assert_eq!(groups[2].0, "text");
        assert_eq!(groups[2].1.len(), 4);
    }
}
