// ABOUTME: The two hand-authored base preset themes, light and dark
// ABOUTME: Generated themes are assembled from these field-for-field

use tinct_types::{Rgb, ThemeMode};

use crate::descriptor::{
    ActionColors, BackgroundColors, Branding, BrandingBadge, Breakpoints, ImageStyles, Palette,
    PaletteColor, PillStyle, RoleColors, RoleFill, Roles, Spacing, SurfaceFill, SurfaceHover,
    SurfaceStyle, Surfaces, TextColors, ThemeDescriptor, Transitions,
};
use crate::syntax::SyntaxTheme;

const fn c(hex: u32) -> Rgb {
    Rgb::new(
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}

/// Neutral gray ramp shared by both presets.
mod gray {
    use super::Rgb;
    use super::c;

    pub const G50: Rgb = c(0xf9fafb);
    pub const G100: Rgb = c(0xf3f4f6);
    pub const G200: Rgb = c(0xe5e7eb);
    pub const G300: Rgb = c(0xd1d5db);
    pub const G400: Rgb = c(0x9ca3af);
    pub const G500: Rgb = c(0x6b7280);
    pub const G600: Rgb = c(0x4b5563);
    pub const G700: Rgb = c(0x374151);
    pub const G800: Rgb = c(0x1f2937);
    pub const G900: Rgb = c(0x111827);
}

impl ThemeDescriptor {
    /// The base preset for a mode.
    pub fn preset(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// The built-in light theme.
    pub fn light() -> Self {
        let white = Rgb::WHITE;
        Self {
            mode: ThemeMode::Light,
            palette: Palette {
                primary: PaletteColor {
                    main: c(0x2563eb),
                    light: c(0x60a5fa),
                    dark: c(0x1d4ed8),
                    contrast_text: white,
                },
                secondary: PaletteColor {
                    main: gray::G500,
                    light: gray::G400,
                    dark: gray::G600,
                    contrast_text: white,
                },
                error: PaletteColor {
                    main: c(0xdc2626),
                    light: c(0xf87171),
                    dark: c(0xb91c1c),
                    contrast_text: white,
                },
                warning: PaletteColor {
                    main: c(0xd97706),
                    light: c(0xfbbf24),
                    dark: c(0xb45309),
                    contrast_text: white,
                },
                info: PaletteColor {
                    main: c(0x0ea5e9),
                    light: c(0x38bdf8),
                    dark: c(0x0284c7),
                    contrast_text: white,
                },
                success: PaletteColor {
                    main: c(0x16a34a),
                    light: c(0x4ade80),
                    dark: c(0x15803d),
                    contrast_text: white,
                },
                background: BackgroundColors {
                    default: gray::G50,
                    paper: white,
                },
                text: TextColors {
                    primary: gray::G900,
                    secondary: gray::G700,
                    disabled: gray::G500,
                },
                divider: gray::G200,
                action: ActionColors {
                    hover: gray::G100,
                    selected: gray::G200,
                    focus: c(0x93c5fd),
                    active: c(0x1d4ed8),
                },
            },
            roles: Roles {
                active: RoleColors {
                    background: c(0xdbeafe),
                    outline: c(0x2563eb),
                    text: c(0x1d4ed8),
                    fill: RoleFill {
                        solid: c(0x2563eb),
                        outline: c(0x60a5fa),
                        text: white,
                    },
                },
                info: RoleColors {
                    background: c(0xf0f9ff),
                    outline: c(0x0ea5e9),
                    text: c(0x075985),
                    fill: RoleFill {
                        solid: c(0x0ea5e9),
                        outline: c(0x38bdf8),
                        text: white,
                    },
                },
                success: RoleColors {
                    background: c(0xf0fdf4),
                    outline: c(0x16a34a),
                    text: c(0x14532d),
                    fill: RoleFill {
                        solid: c(0x16a34a),
                        outline: c(0x4ade80),
                        text: white,
                    },
                },
                warning: RoleColors {
                    background: c(0xfffbeb),
                    outline: c(0xd97706),
                    text: c(0x78350f),
                    fill: RoleFill {
                        solid: c(0xd97706),
                        outline: c(0xfbbf24),
                        text: white,
                    },
                },
                error: RoleColors {
                    background: c(0xfef2f2),
                    outline: c(0xdc2626),
                    text: c(0x7f1d1d),
                    fill: RoleFill {
                        solid: c(0xdc2626),
                        outline: c(0xf87171),
                        text: white,
                    },
                },
            },
            surfaces: Surfaces {
                l1: SurfaceStyle {
                    background: gray::G50,
                    outline: gray::G300,
                    text: gray::G900,
                    fill: SurfaceFill {
                        solid: gray::G600,
                        outline: gray::G600,
                        text: white,
                    },
                },
                l2: SurfaceStyle {
                    background: gray::G100,
                    outline: gray::G300,
                    text: gray::G800,
                    fill: SurfaceFill {
                        solid: gray::G500,
                        outline: gray::G500,
                        text: white,
                    },
                },
                l2_hover: SurfaceHover {
                    background: gray::G200,
                    outline: gray::G400,
                },
                pill_default: PillStyle {
                    background: gray::G200,
                    outline: gray::G300,
                    text: gray::G700,
                },
            },
            branding: Branding {
                enterprise: BrandingBadge {
                    background: gray::G800,
                    border: gray::G700,
                    text: gray::G50,
                },
                premium: BrandingBadge {
                    background: c(0xede9fe),
                    border: c(0x8b5cf6),
                    text: c(0x5b21b6),
                },
                feature_stage: BrandingBadge {
                    background: c(0xdbeafe),
                    border: c(0x93c5fd),
                    text: c(0x1d4ed8),
                },
            },
            syntax: SyntaxTheme::base(ThemeMode::Light),
            images: ImageStyles {
                monochrome_tint: gray::G700,
                invert_monochrome: false,
                opacity: 1.0,
            },
            breakpoints: Breakpoints::default(),
            transitions: Transitions::default(),
            spacing: Spacing::default(),
        }
    }

    /// The built-in dark theme, the default appearance.
    pub fn dark() -> Self {
        let white = Rgb::WHITE;
        Self {
            mode: ThemeMode::Dark,
            palette: Palette {
                primary: PaletteColor {
                    main: c(0x3b82f6),
                    light: c(0x60a5fa),
                    dark: c(0x2563eb),
                    contrast_text: white,
                },
                secondary: PaletteColor {
                    main: gray::G400,
                    light: gray::G300,
                    dark: gray::G500,
                    contrast_text: Rgb::BLACK,
                },
                error: PaletteColor {
                    main: c(0xef4444),
                    light: c(0xf87171),
                    dark: c(0xdc2626),
                    contrast_text: white,
                },
                warning: PaletteColor {
                    main: c(0xf59e0b),
                    light: c(0xfbbf24),
                    dark: c(0xd97706),
                    contrast_text: white,
                },
                info: PaletteColor {
                    main: c(0x38bdf8),
                    light: c(0x7dd3fc),
                    dark: c(0x0ea5e9),
                    contrast_text: Rgb::BLACK,
                },
                success: PaletteColor {
                    main: c(0x22c55e),
                    light: c(0x4ade80),
                    dark: c(0x16a34a),
                    contrast_text: white,
                },
                background: BackgroundColors {
                    default: gray::G900,
                    paper: gray::G800,
                },
                text: TextColors {
                    primary: gray::G50,
                    secondary: gray::G300,
                    disabled: gray::G500,
                },
                divider: gray::G700,
                action: ActionColors {
                    hover: gray::G800,
                    selected: gray::G700,
                    focus: c(0x1d4ed8),
                    active: c(0x60a5fa),
                },
            },
            roles: Roles {
                active: RoleColors {
                    background: c(0x172554),
                    outline: c(0x3b82f6),
                    text: c(0x93c5fd),
                    fill: RoleFill {
                        solid: c(0x3b82f6),
                        outline: c(0x60a5fa),
                        text: white,
                    },
                },
                info: RoleColors {
                    background: c(0x082f49),
                    outline: c(0x38bdf8),
                    text: c(0xbae6fd),
                    fill: RoleFill {
                        solid: c(0x38bdf8),
                        outline: c(0x7dd3fc),
                        text: Rgb::BLACK,
                    },
                },
                success: RoleColors {
                    background: c(0x052e16),
                    outline: c(0x22c55e),
                    text: c(0xbbf7d0),
                    fill: RoleFill {
                        solid: c(0x22c55e),
                        outline: c(0x4ade80),
                        text: white,
                    },
                },
                warning: RoleColors {
                    background: c(0x451a03),
                    outline: c(0xf59e0b),
                    text: c(0xfde68a),
                    fill: RoleFill {
                        solid: c(0xf59e0b),
                        outline: c(0xfbbf24),
                        text: Rgb::BLACK,
                    },
                },
                error: RoleColors {
                    background: c(0x450a0a),
                    outline: c(0xef4444),
                    text: c(0xfecaca),
                    fill: RoleFill {
                        solid: c(0xef4444),
                        outline: c(0xf87171),
                        text: white,
                    },
                },
            },
            surfaces: Surfaces {
                l1: SurfaceStyle {
                    background: gray::G900,
                    outline: gray::G700,
                    text: white,
                    fill: SurfaceFill {
                        solid: gray::G600,
                        outline: gray::G600,
                        text: white,
                    },
                },
                l2: SurfaceStyle {
                    background: gray::G800,
                    outline: gray::G700,
                    text: gray::G50,
                    fill: SurfaceFill {
                        solid: gray::G500,
                        outline: gray::G500,
                        text: white,
                    },
                },
                l2_hover: SurfaceHover {
                    background: gray::G700,
                    outline: gray::G600,
                },
                pill_default: PillStyle {
                    background: gray::G800,
                    outline: gray::G700,
                    text: gray::G200,
                },
            },
            branding: Branding {
                enterprise: BrandingBadge {
                    background: gray::G900,
                    border: gray::G600,
                    text: gray::G50,
                },
                premium: BrandingBadge {
                    background: c(0x2e1065),
                    border: c(0x7c3aed),
                    text: c(0xddd6fe),
                },
                feature_stage: BrandingBadge {
                    background: c(0x172554),
                    border: c(0x2563eb),
                    text: c(0x93c5fd),
                },
            },
            syntax: SyntaxTheme::base(ThemeMode::Dark),
            images: ImageStyles {
                monochrome_tint: gray::G300,
                invert_monochrome: true,
                opacity: 1.0,
            },
            breakpoints: Breakpoints::default(),
            transitions: Transitions::default(),
            spacing: Spacing::default(),
        }
    }
}
