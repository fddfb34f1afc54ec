// ABOUTME: WCAG-style relative luminance and contrast ratio calculations
// ABOUTME: Includes the lightness-stepping repair used for text-on-color picks

use tinct_types::{Hsl, Rgb};

/// WCAG contrast ratios for accessibility compliance.
pub struct ContrastRatios;

impl ContrastRatios {
    pub const AAA_NORMAL: f32 = 7.0;
    pub const AA_NORMAL: f32 = 4.5;
    pub const AA_LARGE: f32 = 3.0;
}

fn srgb_to_linear(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per the WCAG 2.1 definition.
pub fn relative_luminance(color: Rgb) -> f32 {
    let r = srgb_to_linear(f32::from(color.r) / 255.0);
    let g = srgb_to_linear(f32::from(color.g) / 255.0);
    let b = srgb_to_linear(f32::from(color.b) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two colors, in `[1, 21]`.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f32 {
    let lum_a = relative_luminance(a);
    let lum_b = relative_luminance(b);
    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);
    (lighter + 0.05) / (darker + 0.05)
}

/// Pick white or black text for a surface.
///
/// Lightness 55 is the crossover at which white text stops winning for the
/// hues this engine produces.
pub fn text_on(surface: Hsl) -> Rgb {
    if surface.l < 55.0 { Rgb::WHITE } else { Rgb::BLACK }
}

/// Ensure a color can carry readable text in at least one polarity.
///
/// If neither white nor black reaches `min_ratio` against the color, its
/// lightness is stepped toward whichever side already had the higher
/// ratio until one passes. The hue and saturation are left alone.
pub fn ensure_readable(color: Hsl, min_ratio: f32) -> Hsl {
    let mut current = color;
    // The step size bounds the loop: lightness moves monotonically toward
    // an extreme where one of the two ratios is maximal.
    const STEP: f32 = 5.0;

    let rgb = current.to_rgb();
    let white = contrast_ratio(rgb, Rgb::WHITE);
    let black = contrast_ratio(rgb, Rgb::BLACK);
    if white >= min_ratio || black >= min_ratio {
        return current;
    }

    let darkening = white > black;
    loop {
        current = if darkening {
            current.darken(STEP)
        } else {
            current.lighten(STEP)
        };
        let rgb = current.to_rgb();
        if contrast_ratio(rgb, Rgb::WHITE) >= min_ratio
            || contrast_ratio(rgb, Rgb::BLACK) >= min_ratio
        {
            return current;
        }
        if current.l <= 0.0 || current.l >= 100.0 {
            return current;
        }
    }
}

/// Ensure `text` reads against `surface`, preferring the given text color
/// and falling back to the plain white/black pick when it cannot reach
/// `min_ratio` by lightness adjustment alone.
pub fn readable_text(surface: Rgb, text: Hsl, min_ratio: f32) -> Rgb {
    let surface_is_dark = relative_luminance(surface) < 0.5;
    let mut current = text;
    for _ in 0..12 {
        if contrast_ratio(surface, current.to_rgb()) >= min_ratio {
            return current.to_rgb();
        }
        current = if surface_is_dark {
            current.lighten(8.0)
        } else {
            current.darken(8.0)
        };
    }
    if contrast_ratio(surface, current.to_rgb()) >= min_ratio {
        current.to_rgb()
    } else {
        text_on(surface.to_hsl())
    }
}
