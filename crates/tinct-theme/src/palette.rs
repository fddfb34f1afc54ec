// ABOUTME: Seed color analysis and palette derivation via HSL transforms
// ABOUTME: One seed in, eight harmonious colors plus their HSL anchors out

use serde::{Deserialize, Serialize};
use tinct_types::{Hsl, Rgb, hsl};

/// Hue offset between the primary and the derived secondary color.
/// A split-complementary scheme reads as harmonious without the harshness
/// of a direct complement.
const SECONDARY_HUE_OFFSET: f32 = 150.0;

/// Lightness delta between `primary` and its light/dark companions.
const SHADE_DELTA: f32 = 20.0;

/// How a seed color classifies before adjustment.
///
/// Thresholds: lightness above 60 reads as light, below 30 as dark, and
/// saturation under 25 as washed out enough to need a stronger floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedProfile {
    pub is_light: bool,
    pub is_dark: bool,
    pub is_desaturated: bool,
}

impl SeedProfile {
    pub fn classify(seed: Hsl) -> Self {
        Self {
            is_light: seed.l > 60.0,
            is_dark: seed.l < 30.0,
            is_desaturated: seed.s < 25.0,
        }
    }
}

/// The derived color set a theme is assembled from.
///
/// The `primary`/`secondary` HSL anchors are kept alongside the quantized
/// sRGB values so descriptor assembly can parameterize on exact hue and
/// saturation rather than re-deriving them from 8-bit channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: Rgb,
    pub primary_light: Rgb,
    pub primary_dark: Rgb,
    pub secondary: Rgb,
    pub background: Rgb,
    pub background_dark: Rgb,
    pub text: Rgb,
    pub text_light: Rgb,

    /// Adjusted primary anchor (hue, floored saturation, clamped lightness).
    pub primary_hsl: Hsl,
    /// Secondary anchor, hue exactly `primary + 150 (mod 360)`.
    pub secondary_hsl: Hsl,
    /// Classification of the original seed.
    pub profile: SeedProfile,
}

impl ColorPalette {
    /// Derive the palette for a seed color.
    ///
    /// Deterministic and side-effect free; the cache layer depends on
    /// equal inputs producing structurally equal output.
    pub fn derive(seed: Rgb) -> Self {
        let original = seed.to_hsl();
        let profile = SeedProfile::classify(original);

        // Saturation is only ever raised toward the floor, never reduced.
        let saturation = if profile.is_desaturated {
            original.s.max(55.0)
        } else {
            original.s.max(45.0)
        };

        // Nudge extremes toward the mid-range so the primary stays visible
        // against both paper and ink.
        let lightness = if profile.is_light {
            (original.l - 5.0).clamp(40.0, 85.0)
        } else if profile.is_dark {
            (original.l + 10.0).clamp(25.0, 75.0)
        } else {
            original.l
        };

        let primary_hsl = hsl(original.h, saturation, lightness);

        let secondary_saturation = if saturation > 70.0 {
            saturation * 0.9
        } else {
            saturation * 1.2
        }
        .min(90.0);
        let secondary_lightness = if profile.is_light {
            lightness - 15.0
        } else {
            lightness + 15.0
        }
        .clamp(40.0, 70.0);
        let secondary_hsl = hsl(
            primary_hsl.h + SECONDARY_HUE_OFFSET,
            secondary_saturation,
            secondary_lightness,
        );

        let hue = primary_hsl.h;
        Self {
            primary: primary_hsl.to_rgb(),
            primary_light: primary_hsl.lighten(SHADE_DELTA).to_rgb(),
            primary_dark: primary_hsl.darken(SHADE_DELTA).to_rgb(),
            secondary: secondary_hsl.to_rgb(),
            // Near-white and near-black surfaces with an imperceptible tint
            // of the seed hue.
            background: hsl(hue, 3.0, 97.0).to_rgb(),
            background_dark: hsl(hue, 12.0, 13.0).to_rgb(),
            text: hsl(hue, 5.0, 10.0).to_rgb(),
            text_light: hsl(hue, 10.0, 40.0).to_rgb(),
            primary_hsl,
            secondary_hsl,
            profile,
        }
    }
}
