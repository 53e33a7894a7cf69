//! Core domain types for tailor.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - CSS colour values (hex / rgba)
//! - `TokenSet` - The visual language (radii, typography, spacing, ...)
//! - `Theme` - Semantic colour roles for one stylistic variant
//! - `CssLength` / `CssDuration` - Parsed scale values for validation

mod colour;
mod theme;
mod tokens;
mod unit;

pub use colour::Colour;
pub use theme::{
    RoleMap, Theme, ThemeColours, ACCENT_ROLES, BG_ROLES, BORDER_ROLES, SEMANTIC_CATEGORIES,
    SEMANTIC_ROLES, TEXT_ROLES,
};
pub use tokens::{BorderStyle, BorderTokens, TokenSet, Transitions, Typography};
pub use unit::{CssDuration, CssLength, LengthUnit};
