//! tailor - Tailwind theme configuration composer
//!
//! A library for composing a Tailwind `theme.extend` configuration from
//! design-token and theme definitions, with per-project override
//! layering.

pub mod cli;
pub mod compose;
pub mod discovery;
pub mod error;
pub mod output;
pub mod registry;
pub mod types;
pub mod validation;

pub use compose::{compose, flatten_colours, Overrides, TailwindConfig, ThemeExtend, ThemeSection};
pub use discovery::{find_manifest, load_registry, scan, Manifest, ScanResult, MANIFEST_FILENAME};
pub use error::{Result, TailorError};
pub use registry::{BuiltinThemes, ThemeRegistry};
pub use types::{
    BorderStyle, BorderTokens, Colour, CssDuration, CssLength, LengthUnit, RoleMap, Theme,
    ThemeColours, TokenSet, Transitions, Typography,
};
pub use validation::{
    validate_all, validate_theme, validate_tokens, Diagnostic, Severity, ValidationResult,
};
