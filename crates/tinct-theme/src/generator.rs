// ABOUTME: Seed-to-theme generation and the seed-keyed theme cache
// ABOUTME: Assembles a full descriptor from the base preset plus derived overrides

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use tinct_logging::{debug, trace};
use tinct_types::{ColorParseError, Hsl, Rgb, ThemeMode, hsl};

use crate::contrast::{ContrastRatios, ensure_readable, readable_text, text_on};
use crate::descriptor::{
    ActionColors, BackgroundColors, Branding, BrandingBadge, ImageStyles, Palette, PaletteColor,
    PillStyle, RoleColors, RoleFill, Roles, SurfaceFill, SurfaceHover, SurfaceStyle, Surfaces,
    TextColors, ThemeDescriptor,
};
use crate::palette::ColorPalette;
use crate::syntax::SyntaxTheme;

/// The seed used when no custom color has been chosen, a violet.
pub const DEFAULT_SEED: &str = "#6A36FC";

/// Why theme generation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("seed color is not usable: {0}")]
    InvalidSeed(#[from] ColorParseError),
}

impl GenerationError {
    /// Whether the failure indicates a bad stored seed that would fail
    /// again on every load and should be purged from persistence.
    pub fn is_persistent(&self) -> bool {
        matches!(self, GenerationError::InvalidSeed(_))
    }
}

/// Generate a full theme descriptor from a seed hex string.
///
/// Pure and deterministic: equal `(seed, mode)` inputs produce
/// structurally equal descriptors, which the cache layer relies on.
pub fn generate(seed: &str, mode: ThemeMode) -> Result<ThemeDescriptor, GenerationError> {
    let rgb = Rgb::from_hex(seed.trim())?;
    Ok(generate_from_rgb(rgb, mode))
}

/// Generate from an already-parsed seed color.
pub fn generate_from_rgb(seed: Rgb, mode: ThemeMode) -> ThemeDescriptor {
    let palette = ColorPalette::derive(seed);
    assemble(&palette, mode)
}

/// Build the descriptor by explicit construction: every field comes from
/// either the base preset for `mode` or a named override below. Nothing
/// is cloned generically, so there is no partially-patched state to check
/// after the fact.
fn assemble(palette: &ColorPalette, mode: ThemeMode) -> ThemeDescriptor {
    let base = ThemeDescriptor::preset(mode);
    let light_mode = mode == ThemeMode::Light;

    let primary = palette.primary_hsl;
    let secondary = palette.secondary_hsl;
    let h = primary.h;
    let sh = secondary.h;

    let primary_color = PaletteColor {
        main: palette.primary,
        // More spread in dark mode, where the midtones blur together.
        light: primary.lighten(if light_mode { 15.0 } else { 25.0 }).to_rgb(),
        dark: primary.darken(if light_mode { 15.0 } else { 20.0 }).to_rgb(),
        contrast_text: text_on(primary),
    };
    let secondary_color = PaletteColor {
        main: palette.secondary,
        light: secondary.lighten(15.0).to_rgb(),
        dark: secondary.darken(15.0).to_rgb(),
        contrast_text: text_on(secondary),
    };

    let info_base = if light_mode {
        hsl(sh, 70.0, 50.0)
    } else {
        hsl(sh, 80.0, 60.0)
    };
    let success_base = hsl(
        h + 140.0,
        (primary.s * 0.9).min(80.0),
        if light_mode { 45.0 } else { 55.0 },
    );
    let warning_base = hsl(
        h + 30.0,
        (primary.s * 1.1).min(90.0),
        if light_mode { 50.0 } else { 60.0 },
    );
    let error_base = hsl(
        h + 330.0,
        (primary.s * 1.1).min(90.0),
        if light_mode { 50.0 } else { 60.0 },
    );
    let semantic = |anchor: Hsl| PaletteColor {
        main: anchor.to_rgb(),
        light: anchor.lighten(15.0).to_rgb(),
        dark: anchor.darken(15.0).to_rgb(),
        contrast_text: text_on(anchor),
    };

    let background = if light_mode {
        BackgroundColors {
            default: hsl(h, 3.0, 97.0).to_rgb(),
            paper: Rgb::WHITE,
        }
    } else {
        BackgroundColors {
            default: hsl(h, 15.0, 10.0).to_rgb(),
            paper: hsl(h, 7.0, 15.0).to_rgb(),
        }
    };
    let text = if light_mode {
        TextColors {
            primary: hsl(h, 5.0, 10.0).to_rgb(),
            secondary: hsl(h, 15.0, 25.0).to_rgb(),
            disabled: hsl(h, 5.0, 65.0).to_rgb(),
        }
    } else {
        TextColors {
            primary: hsl(h, 5.0, 95.0).to_rgb(),
            secondary: hsl(h, 15.0, 80.0).to_rgb(),
            disabled: hsl(h, 10.0, 40.0).to_rgb(),
        }
    };
    let divider = if light_mode {
        hsl(h, 10.0, 85.0)
    } else {
        hsl(h, 15.0, 25.0)
    }
    .to_rgb();
    let action = if light_mode {
        ActionColors {
            hover: hsl(h, 15.0, 92.0).to_rgb(),
            selected: hsl(h, 20.0, 88.0).to_rgb(),
            focus: hsl(h, 70.0, 65.0).to_rgb(),
            active: hsl(h, 60.0, 40.0).to_rgb(),
        }
    } else {
        ActionColors {
            hover: hsl(h, 20.0, 22.0).to_rgb(),
            selected: hsl(h, 25.0, 25.0).to_rgb(),
            focus: hsl(h, 80.0, 45.0).to_rgb(),
            active: hsl(h, 70.0, 60.0).to_rgb(),
        }
    };

    let active_background = if light_mode {
        hsl(h, 30.0, 90.0)
    } else {
        hsl(h, 40.0, 20.0)
    }
    .to_rgb();
    let active_text_anchor = if light_mode {
        primary
    } else {
        primary.lighten(20.0)
    };
    // The solid fill must carry readable text in at least one polarity.
    let active_fill_anchor = ensure_readable(primary, ContrastRatios::AA_NORMAL);
    let active_role = RoleColors {
        background: active_background,
        outline: palette.primary,
        text: readable_text(active_background, active_text_anchor, ContrastRatios::AA_NORMAL),
        fill: RoleFill {
            solid: active_fill_anchor.to_rgb(),
            outline: palette.primary_light,
            text: text_on(active_fill_anchor),
        },
    };
    let info_role = RoleColors {
        background: if light_mode {
            hsl(sh, 25.0, 95.0)
        } else {
            hsl(sh, 35.0, 15.0)
        }
        .to_rgb(),
        outline: palette.secondary,
        text: if light_mode {
            hsl(sh, 60.0, 30.0).to_rgb()
        } else {
            palette.secondary
        },
        fill: RoleFill {
            solid: palette.secondary,
            outline: secondary.lighten(15.0).to_rgb(),
            text: text_on(secondary),
        },
    };

    let l1 = SurfaceStyle {
        background: if light_mode {
            palette.background
        } else {
            palette.background_dark
        },
        outline: if light_mode {
            hsl(h, 50.0, 80.0)
        } else {
            hsl(h, 60.0, 40.0)
        }
        .to_rgb(),
        text: if light_mode { palette.text } else { Rgb::WHITE },
        fill: SurfaceFill {
            solid: if light_mode {
                palette.primary_light
            } else {
                palette.primary_dark
            },
            outline: if light_mode {
                palette.primary
            } else {
                palette.primary_light
            },
            text: text_on(primary),
        },
    };
    let l2 = SurfaceStyle {
        background: if light_mode {
            hsl(h, 10.0, 97.0)
        } else {
            hsl(h, 20.0, 15.0)
        }
        .to_rgb(),
        outline: if light_mode {
            hsl(h, 30.0, 75.0)
        } else {
            hsl(h, 40.0, 50.0)
        }
        .to_rgb(),
        ..base.surfaces.l2
    };
    let l2_hover = SurfaceHover {
        background: if light_mode {
            hsl(h, 20.0, 90.0)
        } else {
            hsl(h, 30.0, 20.0)
        }
        .to_rgb(),
        ..base.surfaces.l2_hover
    };
    let pill_default = PillStyle {
        background: if light_mode {
            hsl(h, 25.0, 90.0)
        } else {
            hsl(h, 35.0, 20.0)
        }
        .to_rgb(),
        outline: if light_mode {
            hsl(h, 35.0, 80.0)
        } else {
            hsl(h, 45.0, 40.0)
        }
        .to_rgb(),
        ..base.surfaces.pill_default
    };

    let badge = |anchor_hue: f32, border: Rgb| {
        if light_mode {
            BrandingBadge {
                background: hsl(anchor_hue, 30.0, 93.0).to_rgb(),
                border,
                text: hsl(anchor_hue, 60.0, 25.0).to_rgb(),
            }
        } else {
            BrandingBadge {
                background: hsl(anchor_hue, 40.0, 18.0).to_rgb(),
                border,
                text: hsl(anchor_hue, 30.0, 85.0).to_rgb(),
            }
        }
    };
    let branding = Branding {
        enterprise: badge(h, palette.primary_dark),
        premium: badge(sh, palette.secondary),
        feature_stage: badge(h, palette.primary_light),
    };

    // In light mode the darker companion reads on paper; in dark mode the
    // lighter one reads on ink.
    let syntax_accent = if light_mode {
        palette.primary_dark
    } else {
        palette.primary_light
    };
    let syntax = SyntaxTheme::tinted(mode, syntax_accent, text.primary, background.paper);

    let images = ImageStyles {
        monochrome_tint: text.secondary,
        ..base.images
    };

    ThemeDescriptor {
        mode,
        palette: Palette {
            primary: primary_color,
            secondary: secondary_color,
            error: semantic(error_base),
            warning: semantic(warning_base),
            info: semantic(info_base),
            success: semantic(success_base),
            background,
            text,
            divider,
            action,
        },
        roles: Roles {
            active: active_role,
            info: info_role,
            ..base.roles
        },
        surfaces: Surfaces {
            l1,
            l2,
            l2_hover,
            pill_default,
        },
        branding,
        syntax,
        images,
        breakpoints: base.breakpoints,
        transitions: base.transitions,
        spacing: base.spacing,
    }
}

/// Generated light and dark descriptors for one seed.
#[derive(Debug, Clone)]
struct ThemePair {
    light: Arc<ThemeDescriptor>,
    dark: Arc<ThemeDescriptor>,
}

impl ThemePair {
    fn for_mode(&self, mode: ThemeMode) -> Arc<ThemeDescriptor> {
        match mode {
            ThemeMode::Light => Arc::clone(&self.light),
            ThemeMode::Dark => Arc::clone(&self.dark),
        }
    }
}

/// Seed-keyed cache of generated themes.
///
/// An explicit object rather than module state so callers (and tests) can
/// construct isolated instances. Entries are never evicted; the cache
/// lives as long as its owner, typically the theming subsystem.
#[derive(Debug, Default)]
pub struct ThemeCache {
    entries: RwLock<HashMap<String, ThemePair>>,
}

impl ThemeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the descriptor for `(seed, mode)`, generating both modes for
    /// the seed on first sight. Repeated calls hand out the same `Arc`.
    pub fn get_or_generate(
        &self,
        seed: &str,
        mode: ThemeMode,
    ) -> Result<Arc<ThemeDescriptor>, GenerationError> {
        if let Some(pair) = self.entries.read().get(seed) {
            trace!(seed, %mode, "theme cache hit");
            return Ok(pair.for_mode(mode));
        }

        let rgb = Rgb::from_hex(seed.trim())?;
        let pair = ThemePair {
            light: Arc::new(generate_from_rgb(rgb, ThemeMode::Light)),
            dark: Arc::new(generate_from_rgb(rgb, ThemeMode::Dark)),
        };
        debug!(seed, "generated theme pair");

        let mut entries = self.entries.write();
        let entry = entries.entry(seed.to_string()).or_insert(pair);
        Ok(entry.for_mode(mode))
    }

    pub fn contains(&self, seed: &str) -> bool {
        self.entries.read().contains_key(seed)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::contrast_ratio;
    use crate::descriptor::{Breakpoint, TransitionOptions};

    #[test]
    fn generation_is_deterministic() {
        for seed in ["#6A36FC", "#FF7A00", "#00C853"] {
            for mode in ThemeMode::ALL {
                assert_eq!(generate(seed, mode).unwrap(), generate(seed, mode).unwrap());
            }
        }
    }

    #[test]
    fn malformed_seed_is_an_error() {
        let err = generate("not-a-color", ThemeMode::Dark).unwrap_err();
        assert!(err.is_persistent());
    }

    #[test]
    fn seed_whitespace_is_tolerated() {
        assert_eq!(
            generate(" #6A36FC ", ThemeMode::Light).unwrap(),
            generate("#6A36FC", ThemeMode::Light).unwrap()
        );
    }

    #[test]
    fn functional_members_match_base_preset() {
        let theme = generate("#FF7A00", ThemeMode::Light).unwrap();
        let base = ThemeDescriptor::light();
        assert_eq!(
            theme.breakpoints.up(Breakpoint::Sm),
            base.breakpoints.up(Breakpoint::Sm)
        );
        assert_eq!(
            theme
                .transitions
                .create(&["opacity"], TransitionOptions::default()),
            base.transitions
                .create(&["opacity"], TransitionOptions::default())
        );
        assert_eq!(theme.spacing.px(3.0), base.spacing.px(3.0));
    }

    #[test]
    fn primary_flows_into_palette_and_roles() {
        let seed = Rgb::from_hex("#00a3ff").unwrap();
        let palette = ColorPalette::derive(seed);
        let theme = generate_from_rgb(seed, ThemeMode::Dark);
        assert_eq!(theme.palette.primary.main, palette.primary);
        assert_eq!(theme.roles.active.outline, palette.primary);
        assert_eq!(theme.roles.active.fill.solid, palette.primary);
        assert_eq!(theme.surfaces.l1.background, palette.background_dark);
    }

    #[test]
    fn light_mode_l1_uses_light_background() {
        let seed = Rgb::from_hex("#00a3ff").unwrap();
        let palette = ColorPalette::derive(seed);
        let theme = generate_from_rgb(seed, ThemeMode::Light);
        assert_eq!(theme.surfaces.l1.background, palette.background);
        assert_eq!(theme.palette.background.paper, Rgb::WHITE);
    }

    #[test]
    fn contrast_text_polarity_follows_primary_lightness() {
        // Dark-ish primary takes white text.
        let dark_primary = generate("#1d4ed8", ThemeMode::Light).unwrap();
        assert_eq!(dark_primary.palette.primary.contrast_text, Rgb::WHITE);

        // Light primary takes black text.
        let light_primary = generate("#f5f5f5", ThemeMode::Light).unwrap();
        assert_eq!(light_primary.palette.primary.contrast_text, Rgb::BLACK);
    }

    #[test]
    fn active_role_text_reads_on_its_background() {
        for seed in ["#6A36FC", "#F74B4B", "#00A3FF", "#00C853", "#FF7A00", "#9C27B0"] {
            for mode in ThemeMode::ALL {
                let theme = generate(seed, mode).unwrap();
                let ratio =
                    contrast_ratio(theme.roles.active.background, theme.roles.active.text);
                assert!(
                    ratio >= ContrastRatios::AA_NORMAL,
                    "{seed}/{mode}: ratio {ratio}"
                );
            }
        }
    }

    #[test]
    fn untouched_roles_come_from_base() {
        let theme = generate("#6A36FC", ThemeMode::Dark).unwrap();
        let base = ThemeDescriptor::dark();
        assert_eq!(theme.roles.success, base.roles.success);
        assert_eq!(theme.roles.warning, base.roles.warning);
        assert_eq!(theme.roles.error, base.roles.error);
    }

    #[test]
    fn syntax_accent_tracks_mode_polarity() {
        let seed = Rgb::from_hex("#6A36FC").unwrap();
        let palette = ColorPalette::derive(seed);
        let dark = generate_from_rgb(seed, ThemeMode::Dark);
        let light = generate_from_rgb(seed, ThemeMode::Light);
        assert_eq!(
            dark.syntax.foreground_for("type"),
            Some(palette.primary_light)
        );
        assert_eq!(
            light.syntax.foreground_for("identifier"),
            Some(palette.primary_dark)
        );
    }

    #[test]
    fn cache_returns_shared_instances() {
        let cache = ThemeCache::new();
        let a = cache.get_or_generate("#6A36FC", ThemeMode::Dark).unwrap();
        let b = cache.get_or_generate("#6A36FC", ThemeMode::Dark).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);

        let light = cache.get_or_generate("#6A36FC", ThemeMode::Light).unwrap();
        assert_eq!(light.mode, ThemeMode::Light);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cache_rejects_bad_seeds_without_storing() {
        let cache = ThemeCache::new();
        assert!(cache.get_or_generate("#nope", ThemeMode::Dark).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn default_seed_parses() {
        assert!(generate(DEFAULT_SEED, ThemeMode::Dark).is_ok());
    }
}
