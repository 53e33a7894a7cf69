//! Builtin themes shipped with tailor.
//!
//! `financial-dark` is the default: a dark terminal look for trading
//! dashboards, with bull/bear semantic colours.

use indexmap::IndexMap;

use crate::types::{RoleMap, Theme, ThemeColours};

/// Collection of builtin themes.
pub struct BuiltinThemes;

impl BuiltinThemes {
    /// Get all builtin themes.
    pub fn all() -> Vec<Theme> {
        vec![Self::financial_dark()]
    }

    /// Get a builtin theme by name.
    pub fn get(name: &str) -> Option<Theme> {
        match name {
            "financial-dark" => Some(Self::financial_dark()),
            _ => None,
        }
    }

    /// The default dark theme for financial dashboards.
    pub fn financial_dark() -> Theme {
        let mut semantic: IndexMap<String, RoleMap> = IndexMap::new();
        semantic.insert(
            "bullish".to_string(),
            roles(&[
                ("DEFAULT", "#10B981"),
                ("light", "#34D399"),
                ("dark", "#059669"),
                ("bg", "rgba(16, 185, 129, 0.1)"),
                ("border", "rgba(16, 185, 129, 0.3)"),
            ]),
        );
        semantic.insert(
            "bearish".to_string(),
            roles(&[
                ("DEFAULT", "#EF4444"),
                ("light", "#F87171"),
                ("dark", "#DC2626"),
                ("bg", "rgba(239, 68, 68, 0.1)"),
                ("border", "rgba(239, 68, 68, 0.3)"),
            ]),
        );
        semantic.insert(
            "neutral".to_string(),
            roles(&[
                ("DEFAULT", "#3B82F6"),
                ("light", "#60A5FA"),
                ("dark", "#2563EB"),
                ("bg", "rgba(59, 130, 246, 0.1)"),
                ("border", "rgba(59, 130, 246, 0.3)"),
            ]),
        );
        semantic.insert(
            "warning".to_string(),
            roles(&[
                ("DEFAULT", "#F59E0B"),
                ("light", "#FBBF24"),
                ("dark", "#D97706"),
                ("bg", "rgba(245, 158, 11, 0.1)"),
                ("border", "rgba(245, 158, 11, 0.3)"),
            ]),
        );

        Theme {
            name: "financial-dark".to_string(),
            colours: ThemeColours {
                // Subtle dark-to-less-dark gradient for hierarchy
                bg: roles(&[
                    ("primary", "#0A0E27"),
                    ("secondary", "#141B34"),
                    ("tertiary", "#1E2846"),
                    ("elevated", "#252D47"),
                    ("input", "#1a1a1a"),
                ]),
                border: roles(&[
                    ("subtle", "#1E293B"),
                    ("default", "#334155"),
                    ("emphasis", "#475569"),
                ]),
                text: roles(&[
                    ("primary", "#F3F4F6"),
                    ("secondary", "#9CA3AF"),
                    ("tertiary", "#6B7280"),
                    ("muted", "#4B5563"),
                ]),
                semantic,
                accent: roles(&[
                    ("primary", "#3B82F6"),
                    ("hover", "#2563EB"),
                    ("active", "#1D4ED8"),
                    ("light", "#60A5FA"),
                    ("bg", "rgba(59, 130, 246, 0.1)"),
                ]),
            },
        }
    }
}

/// Build an ordered role map from literal pairs.
fn roles(entries: &[(&str, &str)]) -> RoleMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SEMANTIC_CATEGORIES, SEMANTIC_ROLES};

    #[test]
    fn test_get_builtin() {
        assert!(BuiltinThemes::get("financial-dark").is_some());
        assert!(BuiltinThemes::get("nonexistent").is_none());
    }

    #[test]
    fn test_financial_dark_values() {
        let theme = BuiltinThemes::financial_dark();

        assert_eq!(theme.name, "financial-dark");
        assert_eq!(
            theme.colours.bg.get("primary"),
            Some(&"#0A0E27".to_string())
        );
        assert_eq!(
            theme.colours.semantic["bullish"].get("DEFAULT"),
            Some(&"#10B981".to_string())
        );
        assert_eq!(
            theme.colours.semantic["bullish"].get("light"),
            Some(&"#34D399".to_string())
        );
    }

    #[test]
    fn test_financial_dark_is_structurally_complete() {
        let theme = BuiltinThemes::financial_dark();

        for category in SEMANTIC_CATEGORIES {
            let map = theme
                .colours
                .semantic
                .get(*category)
                .unwrap_or_else(|| panic!("missing category {}", category));
            for role in SEMANTIC_ROLES {
                assert!(map.contains_key(*role), "{}.{} missing", category, role);
            }
        }
    }

    #[test]
    fn test_all_names_are_unique() {
        let themes = BuiltinThemes::all();
        let mut names: Vec<&str> = themes.iter().map(|t| t.name.as_str()).collect();
        names.sort();
        names.dedup();

        assert_eq!(names.len(), themes.len());
    }
}
