//! Theme registry.
//!
//! Central storage for every theme a build can select from: the builtins
//! plus any themes loaded from definition files. Lookup is by name, and a
//! file-loaded theme may shadow a builtin (reported as a validation
//! warning, not an error).
//!
//! # Example
//!
//! ```ignore
//! use tailor::registry::ThemeRegistry;
//!
//! let mut registry = ThemeRegistry::with_builtins();
//! registry.insert(my_theme);
//!
//! let theme = registry.get("financial-dark").unwrap();
//! ```

mod builtin;

use indexmap::IndexMap;

use crate::types::Theme;

pub use builtin::BuiltinThemes;

/// Storage for all known themes, keyed by name.
#[derive(Debug, Default)]
pub struct ThemeRegistry {
    themes: IndexMap<String, Theme>,
}

impl ThemeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the builtin themes.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for theme in BuiltinThemes::all() {
            registry.themes.insert(theme.name.clone(), theme);
        }
        registry
    }

    /// Add a theme. Returns the previously registered theme if the name
    /// was already taken.
    pub fn insert(&mut self, theme: Theme) -> Option<Theme> {
        self.themes.insert(theme.name.clone(), theme)
    }

    /// Get a theme by name.
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Get all theme names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(|s| s.as_str())
    }

    /// Iterate over all themes.
    pub fn themes(&self) -> impl Iterator<Item = &Theme> {
        self.themes.values()
    }

    /// Get the number of registered themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Check if a name belongs to a builtin theme.
    pub fn is_builtin(name: &str) -> bool {
        BuiltinThemes::get(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_builtins() {
        let registry = ThemeRegistry::with_builtins();

        assert!(!registry.is_empty());
        assert!(registry.get("financial-dark").is_some());
    }

    #[test]
    fn test_empty_registry() {
        let registry = ThemeRegistry::new();

        assert!(registry.is_empty());
        assert!(registry.get("financial-dark").is_none());
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut registry = ThemeRegistry::new();
        let theme = BuiltinThemes::financial_dark();

        assert!(registry.insert(theme).is_none());
        assert_eq!(registry.len(), 1);
        assert!(registry.get("financial-dark").is_some());
    }

    #[test]
    fn test_insert_shadows_existing() {
        let mut registry = ThemeRegistry::with_builtins();
        let mut theme = BuiltinThemes::financial_dark();
        theme
            .colours
            .bg
            .insert("primary".to_string(), "#000000".to_string());

        let shadowed = registry.insert(theme);

        assert!(shadowed.is_some());
        assert_eq!(
            registry.get("financial-dark").unwrap().colours.bg["primary"],
            "#000000"
        );
    }

    #[test]
    fn test_is_builtin() {
        assert!(ThemeRegistry::is_builtin("financial-dark"));
        assert!(!ThemeRegistry::is_builtin("solarized"));
    }
}
