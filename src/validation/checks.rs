//! Validation checks for themes and token sets.
//!
//! Each check takes a `&Theme` or `&TokenSet` and returns a
//! `ValidationResult`. The role and parity checks mirror what composition
//! enforces fatally; everything else catches authoring errors the
//! composer deliberately passes through to the downstream build tool.

use crate::types::{
    Colour, CssDuration, CssLength, Theme, TokenSet, ACCENT_ROLES, BG_ROLES, BORDER_ROLES,
    SEMANTIC_CATEGORIES, SEMANTIC_ROLES, TEXT_ROLES,
};

use super::warning::{Diagnostic, ValidationResult};

/// Canonical ordering of the radius scale, smallest first.
const RADIUS_ORDER: &[&str] = &["none", "sm", "md", "lg", "xl", "full"];

/// Canonical ordering of the font size scale, smallest first.
const SIZE_ORDER: &[&str] = &["xs", "sm", "base", "lg", "xl", "2xl", "3xl"];

/// Check that every required colour role is present.
pub fn check_required_roles(theme: &Theme) -> ValidationResult {
    let mut result = ValidationResult::new();

    let groups = [
        ("bg", &theme.colours.bg, BG_ROLES),
        ("border", &theme.colours.border, BORDER_ROLES),
        ("text", &theme.colours.text, TEXT_ROLES),
        ("accent", &theme.colours.accent, ACCENT_ROLES),
    ];

    for (group, map, required) in groups {
        for role in required {
            if !map.contains_key(*role) {
                result.push(
                    Diagnostic::error(
                        "tailor::check::missing-role",
                        format!(
                            "Theme '{}': colors.{} is missing required role '{}'",
                            theme.name, group, role
                        ),
                    )
                    .with_help("Composition will fail until the role is defined"),
                );
            }
        }
    }

    for category in SEMANTIC_CATEGORIES {
        match theme.colours.semantic.get(*category) {
            None => {
                result.push(
                    Diagnostic::error(
                        "tailor::check::missing-role",
                        format!(
                            "Theme '{}': colors.semantic is missing category '{}'",
                            theme.name, category
                        ),
                    )
                    .with_help("Composition will fail until the category is defined"),
                );
            }
            Some(map) => {
                for role in SEMANTIC_ROLES {
                    if !map.contains_key(*role) {
                        result.push(Diagnostic::error(
                            "tailor::check::missing-role",
                            format!(
                                "Theme '{}': colors.semantic.{} is missing required role '{}'",
                                theme.name, category, role
                            ),
                        ));
                    }
                }
            }
        }
    }

    result
}

/// Check that all semantic categories define the same sub-role set.
pub fn check_semantic_parity(theme: &Theme) -> ValidationResult {
    let mut result = ValidationResult::new();

    let mut iter = theme.colours.semantic.iter();
    let Some((first_name, first_map)) = iter.next() else {
        return result;
    };

    for (name, map) in iter {
        for role in first_map.keys() {
            if !map.contains_key(role) {
                result.push(
                    Diagnostic::error(
                        "tailor::check::parity",
                        format!(
                            "Theme '{}': semantic category '{}' lacks sub-role '{}' defined by '{}'",
                            theme.name, name, role, first_name
                        ),
                    )
                    .with_help("All semantic categories must define the same sub-role set"),
                );
            }
        }
        for role in map.keys() {
            if !first_map.contains_key(role) {
                result.push(
                    Diagnostic::error(
                        "tailor::check::parity",
                        format!(
                            "Theme '{}': semantic category '{}' lacks sub-role '{}' defined by '{}'",
                            theme.name, first_name, role, name
                        ),
                    )
                    .with_help("All semantic categories must define the same sub-role set"),
                );
            }
        }
    }

    result
}

/// Check that every colour value parses as hex or rgba().
pub fn check_colour_values(theme: &Theme) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (group, map) in theme.flat_groups() {
        for (role, value) in map {
            push_if_bad_colour(&mut result, theme, &format!("colors.{}.{}", group, role), value);
        }
    }

    for (category, map) in &theme.colours.semantic {
        for (role, value) in map {
            push_if_bad_colour(
                &mut result,
                theme,
                &format!("colors.semantic.{}.{}", category, role),
                value,
            );
        }
    }

    for (role, value) in &theme.colours.accent {
        push_if_bad_colour(&mut result, theme, &format!("colors.accent.{}", role), value);
    }

    result
}

fn push_if_bad_colour(result: &mut ValidationResult, theme: &Theme, path: &str, value: &str) {
    if Colour::parse(value).is_err() {
        result.push(
            Diagnostic::error(
                "tailor::check::invalid-colour",
                format!("Theme '{}': {} is not a colour: '{}'", theme.name, path, value),
            )
            .with_help("Use #RRGGBB hex or rgba(r, g, b, a)"),
        );
    }
}

/// Check border width and opacity.
pub fn check_border(tokens: &TokenSet) -> ValidationResult {
    let mut result = ValidationResult::new();

    if CssLength::parse(&tokens.border.width).is_err() {
        result.push(Diagnostic::error(
            "tailor::check::invalid-length",
            format!("border.width is not a CSS length: '{}'", tokens.border.width),
        ));
    }

    if !(0.0..=1.0).contains(&tokens.border.opacity) {
        result.push(
            Diagnostic::error(
                "tailor::check::opacity-range",
                format!("border.opacity must be in [0, 1], got {}", tokens.border.opacity),
            )
            .with_help("Opacity is a fraction, not a percentage"),
        );
    }

    result
}

/// Check that font weights stay within the CSS 100-900 range.
pub fn check_font_weights(tokens: &TokenSet) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (name, weight) in &tokens.typography.weights {
        if !(100..=900).contains(weight) {
            result.push(Diagnostic::error(
                "tailor::check::weight-range",
                format!("typography.weights.{} is {}, outside 100-900", name, weight),
            ));
        }
    }

    result
}

/// Check that no scale is empty.
pub fn check_scales_non_empty(tokens: &TokenSet) -> ValidationResult {
    let mut result = ValidationResult::new();

    let scales = [
        ("radius", tokens.radius.is_empty()),
        ("typography.sizes", tokens.typography.sizes.is_empty()),
        ("typography.weights", tokens.typography.weights.is_empty()),
        ("typography.line_height", tokens.typography.line_height.is_empty()),
        (
            "typography.letter_spacing",
            tokens.typography.letter_spacing.is_empty(),
        ),
        ("spacing", tokens.spacing.is_empty()),
        ("shadows", tokens.shadows.is_empty()),
    ];

    for (name, empty) in scales {
        if empty {
            result.push(
                Diagnostic::error(
                    "tailor::check::empty-scale",
                    format!("Scale '{}' has no entries", name),
                )
                .with_help("Consumers rely on every scale having at least one key"),
            );
        }
    }

    result
}

/// Check that ordered scales actually increase.
///
/// Radius and font sizes follow their canonical key order; spacing is
/// ordered by its numeric keys. Violations are warnings: the config still
/// composes, it just won't mean what the author thinks.
pub fn check_scale_order(tokens: &TokenSet) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_named_order(&mut result, "radius", &tokens.radius, RADIUS_ORDER);
    check_named_order(&mut result, "typography.sizes", &tokens.typography.sizes, SIZE_ORDER);

    // Spacing: keys are rational numbers as strings, in ascending order
    let mut previous: Option<(f64, f64, String)> = None;
    for (key, value) in &tokens.spacing {
        let Ok(numeric_key) = key.parse::<f64>() else {
            result.push(Diagnostic::warning(
                "tailor::check::scale-order",
                format!("spacing key '{}' is not numeric", key),
            ));
            continue;
        };
        let Some(px) = CssLength::parse(value).ok().and_then(|l| l.to_px()) else {
            result.push(Diagnostic::error(
                "tailor::check::invalid-length",
                format!("spacing.{} is not a CSS length: '{}'", key, value),
            ));
            continue;
        };

        if let Some((prev_key, prev_px, prev_name)) = &previous {
            if numeric_key <= *prev_key || px < *prev_px {
                result.push(Diagnostic::warning(
                    "tailor::check::scale-order",
                    format!(
                        "spacing.{} ({}) does not increase over spacing.{}",
                        key, value, prev_name
                    ),
                ));
            }
        }
        previous = Some((numeric_key, px, key.clone()));
    }

    result
}

/// Check transition durations parse and stay ordered fast <= normal <= slow.
pub fn check_transitions(tokens: &TokenSet) -> ValidationResult {
    let mut result = ValidationResult::new();

    let entries = [
        ("fast", &tokens.transitions.fast),
        ("normal", &tokens.transitions.normal),
        ("slow", &tokens.transitions.slow),
    ];

    let mut parsed = Vec::new();
    for (name, value) in entries {
        match CssDuration::parse(value) {
            Ok(duration) => parsed.push((name, duration.millis)),
            Err(_) => result.push(Diagnostic::error(
                "tailor::check::invalid-duration",
                format!("transitions.{} is not a duration: '{}'", name, value),
            )),
        }
    }

    for pair in parsed.windows(2) {
        let (a_name, a) = pair[0];
        let (b_name, b) = pair[1];
        if a > b {
            result.push(Diagnostic::warning(
                "tailor::check::duration-order",
                format!("transitions.{} ({}ms) is slower than transitions.{} ({}ms)", a_name, a, b_name, b),
            ));
        }
    }

    result
}

/// Warn about duplicate theme names across a set of loaded themes.
pub fn check_duplicate_names(themes: &[Theme]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen = std::collections::HashSet::new();

    for theme in themes {
        if !seen.insert(theme.name.as_str()) {
            result.push(
                Diagnostic::warning(
                    "tailor::check::duplicate-name",
                    format!("Theme name '{}' is defined more than once", theme.name),
                )
                .with_help("Later definitions shadow earlier ones in the registry"),
            );
        }
    }

    result
}

/// Check a named scale against its canonical key order.
fn check_named_order(
    result: &mut ValidationResult,
    scale: &str,
    map: &indexmap::IndexMap<String, String>,
    order: &[&str],
) {
    let mut previous: Option<(&str, f64)> = None;

    for key in order {
        let Some(value) = map.get(*key) else {
            continue;
        };
        let Some(px) = CssLength::parse(value).ok().and_then(|l| l.to_px()) else {
            result.push(Diagnostic::error(
                "tailor::check::invalid-length",
                format!("{}.{} is not a CSS length: '{}'", scale, key, value),
            ));
            continue;
        };

        if let Some((prev_key, prev_px)) = previous {
            if px < prev_px {
                result.push(Diagnostic::warning(
                    "tailor::check::scale-order",
                    format!(
                        "{}.{} ({}) is smaller than {}.{}",
                        scale, key, value, scale, prev_key
                    ),
                ));
            }
        }
        previous = Some((*key, px));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::BuiltinThemes;

    #[test]
    fn test_builtin_theme_is_clean() {
        let theme = BuiltinThemes::financial_dark();

        assert!(check_required_roles(&theme).is_ok());
        assert!(check_semantic_parity(&theme).is_ok());
        assert!(check_colour_values(&theme).is_ok());
    }

    #[test]
    fn test_default_tokens_are_clean() {
        let tokens = TokenSet::default_tokens();

        assert!(check_border(&tokens).is_ok());
        assert!(check_font_weights(&tokens).is_ok());
        assert!(check_scales_non_empty(&tokens).is_ok());
        assert!(check_scale_order(&tokens).is_ok());
        assert!(check_transitions(&tokens).is_ok());
    }

    #[test]
    fn test_missing_role_reported() {
        let mut theme = BuiltinThemes::financial_dark();
        theme.colours.text.shift_remove("muted");

        let result = check_required_roles(&theme);
        assert!(result.has_errors());
    }

    #[test]
    fn test_parity_violation_reported() {
        let mut theme = BuiltinThemes::financial_dark();
        theme
            .colours
            .semantic
            .get_mut("warning")
            .unwrap()
            .insert("glow".to_string(), "#FFAA00".to_string());

        let result = check_semantic_parity(&theme);
        // categories are compared against the first (bullish), which lacks glow
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn test_invalid_colour_reported() {
        let mut theme = BuiltinThemes::financial_dark();
        theme
            .colours
            .bg
            .insert("primary".to_string(), "cornflowerblue".to_string());

        let result = check_colour_values(&theme);
        assert!(result.has_errors());
    }

    #[test]
    fn test_opacity_out_of_range() {
        let mut tokens = TokenSet::default_tokens();
        tokens.border.opacity = 15.0;

        let result = check_border(&tokens);
        assert!(result.has_errors());
    }

    #[test]
    fn test_weight_out_of_range() {
        let mut tokens = TokenSet::default_tokens();
        tokens.typography.weights.insert("heavy".to_string(), 950);

        let result = check_font_weights(&tokens);
        assert!(result.has_errors());
    }

    #[test]
    fn test_empty_scale_reported() {
        let mut tokens = TokenSet::default_tokens();
        tokens.shadows.clear();

        let result = check_scales_non_empty(&tokens);
        assert!(result.has_errors());
    }

    #[test]
    fn test_radius_order_violation_is_warning() {
        let mut tokens = TokenSet::default_tokens();
        tokens.radius.insert("md".to_string(), "2px".to_string()); // below sm's 4px

        let result = check_scale_order(&tokens);
        assert!(!result.has_errors());
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_spacing_value_regression_is_warning() {
        let mut tokens = TokenSet::default_tokens();
        tokens.spacing.insert("16".to_string(), "1rem".to_string()); // below 12's 3rem

        let result = check_scale_order(&tokens);
        assert!(result.warning_count() >= 1);
    }

    #[test]
    fn test_non_numeric_spacing_key_is_warning() {
        let mut tokens = TokenSet::default_tokens();
        tokens.spacing.insert("huge".to_string(), "10rem".to_string());

        let result = check_scale_order(&tokens);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_transition_order_violation() {
        let mut tokens = TokenSet::default_tokens();
        tokens.transitions.fast = "400ms".to_string();

        let result = check_transitions(&tokens);
        assert!(!result.has_errors());
        assert!(result.warning_count() >= 1);
    }

    #[test]
    fn test_bad_duration_is_error() {
        let mut tokens = TokenSet::default_tokens();
        tokens.transitions.slow = "soon".to_string();

        let result = check_transitions(&tokens);
        assert!(result.has_errors());
    }

    #[test]
    fn test_duplicate_names() {
        let themes = vec![
            BuiltinThemes::financial_dark(),
            BuiltinThemes::financial_dark(),
        ];

        let result = check_duplicate_names(&themes);
        assert_eq!(result.warning_count(), 1);
    }
}
