//! Colour value parsing.
//!
//! Theme files carry colours as CSS strings (hex or `rgba(...)`). The
//! composer passes them through untouched; this type exists so the
//! validation suite can check that authored values actually parse.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TailorError};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in [0, 1]. CSS rgba() carries a float, so we keep it as one.
    pub a: f32,
}

impl Colour {
    /// Create a new colour from RGB components and a float alpha.
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse any supported CSS colour string: hex or `rgba(...)`.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with("rgba(") || s.starts_with("rgb(") {
            Self::from_rgba(s)
        } else {
            Self::from_hex(s)
        }
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').ok_or_else(|| TailorError::Parse {
            message: format!("Invalid colour: {}", s),
            help: Some("Hex colours must start with '#'".to_string()),
        })?;

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = parse_hex_digit(hex.chars().nth(0).unwrap())?;
                let g = parse_hex_digit(hex.chars().nth(1).unwrap())?;
                let b = parse_hex_digit(hex.chars().nth(2).unwrap())?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = parse_hex_byte(&hex[6..8])?;
                Ok(Self::new(r, g, b, a as f32 / 255.0))
            }
            _ => Err(TailorError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB, #RRGGBB, or #RRGGBBAA format".to_string()),
            }),
        }
    }

    /// Parse an `rgba(r, g, b, a)` or `rgb(r, g, b)` colour string.
    pub fn from_rgba(s: &str) -> Result<Self> {
        let s = s.trim();
        let inner = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| invalid_rgba(s))?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(invalid_rgba(s));
        }

        let r = parse_channel(parts[0]).ok_or_else(|| invalid_rgba(s))?;
        let g = parse_channel(parts[1]).ok_or_else(|| invalid_rgba(s))?;
        let b = parse_channel(parts[2]).ok_or_else(|| invalid_rgba(s))?;

        let a = if parts.len() == 4 {
            let a: f32 = parts[3].parse().map_err(|_| invalid_rgba(s))?;
            if !(0.0..=1.0).contains(&a) {
                return Err(TailorError::Parse {
                    message: format!("Alpha out of range in: {}", s),
                    help: Some("Alpha must be between 0 and 1".to_string()),
                });
            }
            a
        } else {
            1.0
        };

        Ok(Self::new(r, g, b, a))
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }
}

impl FromStr for Colour {
    type Err = TailorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

fn invalid_rgba(s: &str) -> TailorError {
    TailorError::Parse {
        message: format!("Invalid rgba colour: {}", s),
        help: Some("Use rgba(r, g, b, a) with channels 0-255 and alpha 0-1".to_string()),
    }
}

/// Parse a 0-255 integer channel.
fn parse_channel(s: &str) -> Option<u8> {
    s.parse::<u16>().ok().filter(|&v| v <= 255).map(|v| v as u8)
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| TailorError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| TailorError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
