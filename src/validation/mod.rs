//! Validation system for themes and token sets.
//!
//! Runs a suite of checks and reports errors and warnings. Used by
//! `tailor validate`, and by `tailor build` before composing. Everything
//! here is advisory tooling: composition itself only enforces required
//! roles and semantic parity.

mod checks;
mod contrast;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::types::{Theme, TokenSet};

/// Run all theme checks.
pub fn validate_theme(theme: &Theme) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_required_roles(theme));
    result.merge(checks::check_semantic_parity(theme));
    result.merge(checks::check_colour_values(theme));
    result.merge(contrast::check_text_contrast(theme));

    result
}

/// Run all token set checks.
pub fn validate_tokens(tokens: &TokenSet) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_border(tokens));
    result.merge(checks::check_font_weights(tokens));
    result.merge(checks::check_scales_non_empty(tokens));
    result.merge(checks::check_scale_order(tokens));
    result.merge(checks::check_transitions(tokens));

    result
}

/// Run all checks over a token set and a group of themes.
pub fn validate_all(tokens: &TokenSet, themes: &[Theme]) -> ValidationResult {
    let mut result = validate_tokens(tokens);

    for theme in themes {
        result.merge(validate_theme(theme));
    }
    result.merge(checks::check_duplicate_names(themes));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult) {
    for d in result.iter() {
        eprintln!("  {}", d);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        eprintln!(
            "Validation failed: {} error(s), {} warning(s)",
            errors, warnings
        );
    } else if warnings > 0 {
        eprintln!("Validation passed ({} warning(s))", warnings);
    } else {
        eprintln!("Validation passed.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::BuiltinThemes;

    #[test]
    fn test_validate_shipped_defaults() {
        let tokens = TokenSet::default_tokens();
        let theme = BuiltinThemes::financial_dark();

        let result = validate_all(&tokens, &[theme]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_theme_catches_missing_role() {
        let mut theme = BuiltinThemes::financial_dark();
        theme.colours.bg.shift_remove("input");

        let result = validate_theme(&theme);
        assert!(result.has_errors());
    }

    #[test]
    fn test_validate_tokens_catches_bad_opacity() {
        let mut tokens = TokenSet::default_tokens();
        tokens.border.opacity = -0.5;

        let result = validate_tokens(&tokens);
        assert!(result.has_errors());
    }

    #[test]
    fn test_validate_all_reports_duplicates() {
        let tokens = TokenSet::default_tokens();
        let themes = vec![
            BuiltinThemes::financial_dark(),
            BuiltinThemes::financial_dark(),
        ];

        let result = validate_all(&tokens, &themes);
        assert!(!result.has_errors());
        assert_eq!(result.warning_count(), 1);
    }
}
