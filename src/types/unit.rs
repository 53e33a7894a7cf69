//! CSS length and duration parsing.
//!
//! Scale values stay as strings all the way through composition; these
//! types are only used by validation to compare entries within a scale.

use std::str::FromStr;

use crate::error::{Result, TailorError};

/// Units a scale value can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Px,
    Rem,
    Em,
    /// Bare `0` or a unitless line-height multiplier.
    None,
}

/// A parsed CSS length like `0.875rem`, `6px`, or `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssLength {
    pub value: f64,
    pub unit: LengthUnit,
}

impl CssLength {
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Parse a CSS length string.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(invalid_length(s));
        }

        let (number, unit) = if let Some(n) = s.strip_suffix("rem") {
            (n, LengthUnit::Rem)
        } else if let Some(n) = s.strip_suffix("em") {
            (n, LengthUnit::Em)
        } else if let Some(n) = s.strip_suffix("px") {
            (n, LengthUnit::Px)
        } else {
            (s, LengthUnit::None)
        };

        let value: f64 = number.trim().parse().map_err(|_| invalid_length(s))?;
        Ok(Self::new(value, unit))
    }

    /// Value in pixels, assuming the CSS default of 16px per rem/em.
    ///
    /// Unitless values are only comparable when zero, so anything else
    /// returns None.
    pub fn to_px(self) -> Option<f64> {
        match self.unit {
            LengthUnit::Px => Some(self.value),
            LengthUnit::Rem | LengthUnit::Em => Some(self.value * 16.0),
            LengthUnit::None if self.value == 0.0 => Some(0.0),
            LengthUnit::None => None,
        }
    }
}

impl FromStr for CssLength {
    type Err = TailorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A parsed CSS duration like `150ms` or `0.3s`, held in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssDuration {
    pub millis: f64,
}

impl CssDuration {
    /// Parse a CSS duration string.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        // "ms" must be checked before "s"
        let (number, scale) = if let Some(n) = s.strip_suffix("ms") {
            (n, 1.0)
        } else if let Some(n) = s.strip_suffix('s') {
            (n, 1000.0)
        } else {
            return Err(invalid_duration(s));
        };

        let value: f64 = number.trim().parse().map_err(|_| invalid_duration(s))?;
        if value < 0.0 {
            return Err(invalid_duration(s));
        }

        Ok(Self {
            millis: value * scale,
        })
    }
}

impl FromStr for CssDuration {
    type Err = TailorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn invalid_length(s: &str) -> TailorError {
    TailorError::Parse {
        message: format!("Invalid CSS length: '{}'", s),
        help: Some("Use a number with px, rem, or em, or a bare 0".to_string()),
    }
}

fn invalid_duration(s: &str) -> TailorError {
    TailorError::Parse {
        message: format!("Invalid CSS duration: '{}'", s),
        help: Some("Use a number with ms or s, e.g. 150ms".to_string()),
    }
}
