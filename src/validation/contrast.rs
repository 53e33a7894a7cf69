//! Text-on-background contrast checks.
//!
//! Readability lint for theme authors: primary and secondary text should
//! clear WCAG AA (4.5:1) on every surface they can land on. Tertiary and
//! muted text are exempt; they are labels and disabled states by
//! definition. Translucent colours are skipped since their effective
//! value depends on what they composite over.

use palette::color_difference::Wcag21RelativeContrast;
use palette::Srgb;

use crate::types::{Colour, Theme};

use super::warning::{Diagnostic, ValidationResult};

/// WCAG AA minimum contrast for normal text.
const MIN_CONTRAST: f32 = 4.5;

/// Text roles expected to be readable everywhere.
const READABLE_TEXT: &[&str] = &["primary", "secondary"];

/// Surfaces text can appear on.
const SURFACES: &[&str] = &["primary", "secondary", "tertiary", "elevated"];

/// Warn when a readable text role falls below AA contrast on a surface.
pub fn check_text_contrast(theme: &Theme) -> ValidationResult {
    let mut result = ValidationResult::new();

    for text_role in READABLE_TEXT {
        let Some(fg) = opaque_colour(theme.colours.text.get(*text_role)) else {
            continue;
        };

        for surface in SURFACES {
            let Some(bg) = opaque_colour(theme.colours.bg.get(*surface)) else {
                continue;
            };

            let ratio = srgb(fg).relative_contrast(srgb(bg));
            if ratio < MIN_CONTRAST {
                result.push(
                    Diagnostic::warning(
                        "tailor::check::contrast",
                        format!(
                            "Theme '{}': text.{} on bg.{} has contrast {:.2}:1, below {}:1",
                            theme.name, text_role, surface, ratio, MIN_CONTRAST
                        ),
                    )
                    .with_help("WCAG AA requires 4.5:1 for normal text"),
                );
            }
        }
    }

    result
}

/// Parse an opaque colour; translucent or malformed values return None.
fn opaque_colour(value: Option<&String>) -> Option<Colour> {
    let colour = Colour::parse(value?).ok()?;
    colour.is_opaque().then_some(colour)
}

fn srgb(colour: Colour) -> Srgb<f32> {
    Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    )
}
