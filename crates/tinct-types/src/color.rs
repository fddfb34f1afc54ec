// ABOUTME: sRGB and HSL color values with hex parsing and cylindrical conversions
// ABOUTME: All palette math elsewhere operates on these two representations

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error produced when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected a 6-digit hex color like `#6a36fc`, got `{0}`")]
    InvalidFormat(String),
    #[error("invalid hex digits in `{0}`")]
    InvalidDigits(String),
}

/// An 8-bit sRGB color value.
///
/// Serializes as a lowercase `#rrggbb` hex string, which is also the wire
/// format used for persisted seed colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string (case-insensitive, `#` required).
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::InvalidFormat(input.to_string()))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::InvalidFormat(input.to_string()));
        }
        let parse_pair = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidDigits(input.to_string()))
        };
        Ok(Self {
            r: parse_pair(&digits[0..2])?,
            g: parse_pair(&digits[2..4])?,
            b: parse_pair(&digits[4..6])?,
        })
    }

    /// Render as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to the cylindrical HSL representation.
    pub fn to_hsl(self) -> Hsl {
        Hsl::from_rgb(self)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Rgb, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// An HSL color: hue in degrees `[0, 360)`, saturation and lightness in
/// percent `[0, 100]`.
///
/// Component ranges match how designers talk about the values, not unit
/// floats; constructors normalize out-of-range input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// Shorthand constructor, normalizing hue and clamping saturation/lightness.
pub fn hsl(h: f32, s: f32, l: f32) -> Hsl {
    Hsl::new(h, s, l)
}

impl Hsl {
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = f32::from(rgb.r) / 255.0;
        let g = f32::from(rgb.g) / 255.0;
        let b = f32::from(rgb.b) / 255.0;

        let max = r.max(g.max(b));
        let min = r.min(g.min(b));
        let l = (max + min) * 0.5;

        if (max - min).abs() < f32::EPSILON {
            return Self {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if (max - r).abs() < f32::EPSILON {
            ((g - b) / d).rem_euclid(6.0)
        } else if (max - g).abs() < f32::EPSILON {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } * 60.0;

        Self {
            h: h.rem_euclid(360.0),
            s: (s * 100.0).clamp(0.0, 100.0),
            l: (l * 100.0).clamp(0.0, 100.0),
        }
    }

    pub fn to_rgb(self) -> Rgb {
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = self.h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match hp {
            hp if hp < 1.0 => (c, x, 0.0),
            hp if hp < 2.0 => (x, c, 0.0),
            hp if hp < 3.0 => (0.0, c, x),
            hp if hp < 4.0 => (0.0, x, c),
            hp if hp < 5.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }

    /// Rotate the hue by `degrees`, wrapping into `[0, 360)`.
    pub fn rotate_hue(self, degrees: f32) -> Self {
        Self {
            h: (self.h + degrees).rem_euclid(360.0),
            ..self
        }
    }

    /// Raise lightness by `points` (percentage points, saturating at 100).
    pub fn lighten(self, points: f32) -> Self {
        Self {
            l: (self.l + points).clamp(0.0, 100.0),
            ..self
        }
    }

    /// Lower lightness by `points` (percentage points, saturating at 0).
    pub fn darken(self, points: f32) -> Self {
        Self {
            l: (self.l - points).clamp(0.0, 100.0),
            ..self
        }
    }

    pub fn with_lightness(self, l: f32) -> Self {
        Self {
            l: l.clamp(0.0, 100.0),
            ..self
        }
    }

    pub fn with_saturation(self, s: f32) -> Self {
        Self {
            s: s.clamp(0.0, 100.0),
            ..self
        }
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}
