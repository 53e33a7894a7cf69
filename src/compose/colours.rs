//! Colour role flattening.
//!
//! Tailwind wants a flat `colors` map, so nested role groups become
//! dash-joined keys:
//!
//! - `bg.primary` -> `bg-primary` (same for border and text groups)
//! - `semantic.bullish.DEFAULT` -> `bullish`, other sub-roles ->
//!   `bullish-light`, `bullish-bg`, ...
//! - `accent.primary` -> `accent`, other sub-roles -> `accent-hover`, ...
//!
//! Missing required roles and semantic categories whose sub-role sets
//! diverge are composition errors. Colour *values* are not checked here;
//! that is the validation suite's job.

use indexmap::IndexMap;

use crate::error::{Result, TailorError};
use crate::types::{
    RoleMap, ThemeColours, ACCENT_ROLES, BG_ROLES, BORDER_ROLES, SEMANTIC_CATEGORIES,
    SEMANTIC_ROLES, TEXT_ROLES,
};

/// Flatten a theme's colour groups into the Tailwind `colors` map.
pub fn flatten_colours(colours: &ThemeColours) -> Result<IndexMap<String, String>> {
    let mut flat = IndexMap::new();

    for (group, map) in [
        ("bg", &colours.bg),
        ("border", &colours.border),
        ("text", &colours.text),
    ] {
        let required = match group {
            "bg" => BG_ROLES,
            "border" => BORDER_ROLES,
            _ => TEXT_ROLES,
        };
        require_roles(&format!("colors.{}", group), map, required)?;

        for (role, value) in map {
            insert_unique(&mut flat, format!("{}-{}", group, role), value)?;
        }
    }

    check_semantic(&colours.semantic)?;

    for (category, map) in &colours.semantic {
        for (role, value) in map {
            let key = if role == "DEFAULT" {
                category.clone()
            } else {
                format!("{}-{}", category, role)
            };
            insert_unique(&mut flat, key, value)?;
        }
    }

    require_roles("colors.accent", &colours.accent, ACCENT_ROLES)?;
    for (role, value) in &colours.accent {
        let key = if role == "primary" {
            "accent".to_string()
        } else {
            format!("accent-{}", role)
        };
        insert_unique(&mut flat, key, value)?;
    }

    Ok(flat)
}

/// Check that every required role is present in a group.
fn require_roles(section: &str, map: &RoleMap, required: &[&str]) -> Result<()> {
    for role in required {
        if !map.contains_key(*role) {
            return Err(TailorError::MissingKey {
                section: section.to_string(),
                key: role.to_string(),
                help: Some(format!("Every theme must define {}.{}", section, role)),
            });
        }
    }
    Ok(())
}

/// Check required semantic categories, their required sub-roles, and
/// structural parity across all categories.
fn check_semantic(semantic: &IndexMap<String, RoleMap>) -> Result<()> {
    for category in SEMANTIC_CATEGORIES {
        let map = semantic
            .get(*category)
            .ok_or_else(|| TailorError::MissingKey {
                section: "colors.semantic".to_string(),
                key: category.to_string(),
                help: Some(format!(
                    "Every theme must define the '{}' semantic category",
                    category
                )),
            })?;

        require_roles(&format!("colors.semantic.{}", category), map, SEMANTIC_ROLES)?;
    }

    // Parity: every category (including author-added ones) must expose the
    // same sub-role set, so consumers can iterate categories generically.
    let mut iter = semantic.iter();
    if let Some((first_name, first_map)) = iter.next() {
        for (name, map) in iter {
            for role in first_map.keys() {
                if !map.contains_key(role) {
                    return Err(parity_error(name, first_name, role));
                }
            }
            for role in map.keys() {
                if !first_map.contains_key(role) {
                    return Err(parity_error(first_name, name, role));
                }
            }
        }
    }

    Ok(())
}

fn parity_error(missing_in: &str, present_in: &str, role: &str) -> TailorError {
    TailorError::Parity {
        message: format!(
            "category '{}' lacks sub-role '{}' defined by '{}'",
            missing_in, role, present_in
        ),
        help: Some("All semantic categories must define the same sub-role set".to_string()),
    }
}

/// Insert a flattened key, rejecting collisions between groups.
fn insert_unique(
    flat: &mut IndexMap<String, String>,
    key: String,
    value: &str,
) -> Result<()> {
    if flat.insert(key.clone(), value.to_string()).is_some() {
        return Err(TailorError::Build {
            message: format!("Flattened colour key '{}' is defined twice", key),
            help: Some("Rename the colliding role or semantic category".to_string()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TailorError;
    use crate::registry::BuiltinThemes;

    #[test]
    fn test_flatten_builtin_theme() {
        let theme = BuiltinThemes::financial_dark();
        let flat = flatten_colours(&theme.colours).unwrap();

        assert_eq!(flat.get("bg-primary"), Some(&"#0A0E27".to_string()));
        assert_eq!(flat.get("border-subtle"), Some(&"#1E293B".to_string()));
        assert_eq!(flat.get("text-muted"), Some(&"#4B5563".to_string()));
        assert_eq!(flat.get("bullish"), Some(&"#10B981".to_string()));
        assert_eq!(flat.get("bullish-light"), Some(&"#34D399".to_string()));
        assert_eq!(
            flat.get("warning-border"),
            Some(&"rgba(245, 158, 11, 0.3)".to_string())
        );
        assert_eq!(flat.get("accent"), Some(&"#3B82F6".to_string()));
        assert_eq!(flat.get("accent-hover"), Some(&"#2563EB".to_string()));
    }

    #[test]
    fn test_no_bare_group_keys() {
        let theme = BuiltinThemes::financial_dark();
        let flat = flatten_colours(&theme.colours).unwrap();

        // bg/border/text have no bare-name special case
        assert!(flat.get("bg").is_none());
        assert!(flat.get("border").is_none());
        assert!(flat.get("text").is_none());
        // and no stray DEFAULT suffixes
        assert!(flat.get("bullish-DEFAULT").is_none());
        assert!(flat.get("accent-primary").is_none());
    }

    #[test]
    fn test_missing_role_is_fatal() {
        let mut theme = BuiltinThemes::financial_dark();
        theme.colours.accent.shift_remove("hover");

        let err = flatten_colours(&theme.colours).unwrap_err();
        match err {
            TailorError::MissingKey { section, key, .. } => {
                assert_eq!(section, "colors.accent");
                assert_eq!(key, "hover");
            }
            other => panic!("expected MissingKey, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_semantic_category_is_fatal() {
        let mut theme = BuiltinThemes::financial_dark();
        theme.colours.semantic.shift_remove("neutral");

        let err = flatten_colours(&theme.colours).unwrap_err();
        assert!(matches!(err, TailorError::MissingKey { .. }));
    }

    #[test]
    fn test_parity_violation_is_fatal() {
        let mut theme = BuiltinThemes::financial_dark();
        // bullish gains a sub-role the others lack
        theme
            .colours
            .semantic
            .get_mut("bullish")
            .unwrap()
            .insert("glow".to_string(), "#00FF00".to_string());

        let err = flatten_colours(&theme.colours).unwrap_err();
        assert!(matches!(err, TailorError::Parity { .. }));
    }

    #[test]
    fn test_extra_role_in_all_categories_flattens() {
        let mut theme = BuiltinThemes::financial_dark();
        for map in theme.colours.semantic.values_mut() {
            map.insert("glow".to_string(), "#00FF00".to_string());
        }

        let flat = flatten_colours(&theme.colours).unwrap();
        assert_eq!(flat.get("bullish-glow"), Some(&"#00FF00".to_string()));
        assert_eq!(flat.get("warning-glow"), Some(&"#00FF00".to_string()));
    }

    #[test]
    fn test_colliding_flattened_keys_rejected() {
        let mut theme = BuiltinThemes::financial_dark();
        // A semantic category named "accent" collides with the accent group
        let accent_like = theme.colours.semantic["bullish"].clone();
        theme
            .colours
            .semantic
            .insert("accent".to_string(), accent_like);

        let err = flatten_colours(&theme.colours).unwrap_err();
        assert!(matches!(err, TailorError::Build { .. }));
    }
}
