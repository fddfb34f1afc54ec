// ABOUTME: The theme descriptor and its component types
// ABOUTME: Built by explicit construction from a base preset plus overrides

use tinct_types::{Rgb, ThemeMode};

use crate::syntax::SyntaxTheme;

/// A palette entry with its main value, lighter and darker companions, and
/// the text color that reads against `main`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteColor {
    pub main: Rgb,
    pub light: Rgb,
    pub dark: Rgb,
    pub contrast_text: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundColors {
    pub default: Rgb,
    pub paper: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextColors {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub disabled: Rgb,
}

/// Interaction-state colors for generic controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionColors {
    pub hover: Rgb,
    pub selected: Rgb,
    pub focus: Rgb,
    pub active: Rgb,
}

/// The classic palette block of a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub error: PaletteColor,
    pub warning: PaletteColor,
    pub info: PaletteColor,
    pub success: PaletteColor,
    pub background: BackgroundColors,
    pub text: TextColors,
    pub divider: Rgb,
    pub action: ActionColors,
}

/// Fill colors for a role: solid surface, outline variant, and the text
/// placed on the solid fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleFill {
    pub solid: Rgb,
    pub outline: Rgb,
    pub text: Rgb,
}

/// A set of colors keyed by the purpose a UI element serves, rather than
/// by raw palette position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleColors {
    pub background: Rgb,
    pub outline: Rgb,
    pub text: Rgb,
    pub fill: RoleFill,
}

/// Semantic role groups consumed by UI components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roles {
    /// Something is currently running or selected.
    pub active: RoleColors,
    /// Neutral information.
    pub info: RoleColors,
    pub success: RoleColors,
    pub warning: RoleColors,
    pub error: RoleColors,
}

/// Fill colors for a layered surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceFill {
    pub solid: Rgb,
    pub outline: Rgb,
    pub text: Rgb,
}

/// One layered-surface token: a nested panel level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceStyle {
    pub background: Rgb,
    pub outline: Rgb,
    pub text: Rgb,
    pub fill: SurfaceFill,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHover {
    pub background: Rgb,
    pub outline: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillStyle {
    pub background: Rgb,
    pub outline: Rgb,
    pub text: Rgb,
}

/// Layered surface tokens for nested panels (L1 outermost, L2 nested),
/// plus the default pill treatment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surfaces {
    pub l1: SurfaceStyle,
    pub l2: SurfaceStyle,
    pub l2_hover: SurfaceHover,
    pub pill_default: PillStyle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrandingBadge {
    pub background: Rgb,
    pub border: Rgb,
    pub text: Rgb,
}

/// Marketing-adjacent colors for plan badges and stage labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branding {
    pub enterprise: BrandingBadge,
    pub premium: BrandingBadge,
    pub feature_stage: BrandingBadge,
}

/// Render styles for external (third-party) images so they sit well on
/// either appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageStyles {
    /// Tint applied to monochrome assets.
    pub monochrome_tint: Rgb,
    /// Whether monochrome assets should be inverted for this appearance.
    pub invert_monochrome: bool,
    pub opacity: f32,
}

/// Viewport breakpoints, smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

/// Breakpoint table with media-query builders.
///
/// These replace function members of the original theme contract; being
/// plain data, they survive any copy of the descriptor by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub xs: u32,
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
}

impl Breakpoints {
    pub fn width(&self, bp: Breakpoint) -> u32 {
        match bp {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    /// Media query matching the breakpoint and everything above it.
    pub fn up(&self, bp: Breakpoint) -> String {
        format!("@media (min-width: {}px)", self.width(bp))
    }

    /// Media query matching everything below the breakpoint.
    pub fn down(&self, bp: Breakpoint) -> String {
        format!("@media (max-width: {}px)", self.width(bp).saturating_sub(1))
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            xs: 0,
            sm: 600,
            md: 900,
            lg: 1200,
            xl: 1536,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDurations {
    pub shortest: u32,
    pub short: u32,
    pub standard: u32,
    pub complex: u32,
}

impl Default for TransitionDurations {
    fn default() -> Self {
        Self {
            shortest: 150,
            short: 250,
            standard: 300,
            complex: 375,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionEasings {
    pub ease_in_out: &'static str,
    pub ease_out: &'static str,
    pub ease_in: &'static str,
    pub sharp: &'static str,
}

impl Default for TransitionEasings {
    fn default() -> Self {
        Self {
            ease_in_out: "cubic-bezier(0.4, 0, 0.2, 1)",
            ease_out: "cubic-bezier(0.0, 0, 0.2, 1)",
            ease_in: "cubic-bezier(0.4, 0, 1, 1)",
            sharp: "cubic-bezier(0.4, 0, 0.6, 1)",
        }
    }
}

/// Options for [`Transitions::create`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransitionOptions {
    /// Duration override in milliseconds; defaults to the standard duration.
    pub duration_ms: Option<u32>,
    /// Easing override; defaults to ease-in-out.
    pub easing: Option<&'static str>,
    /// Delay in milliseconds.
    pub delay_ms: u32,
}

/// Transition builder, the data-driven stand-in for the original theme's
/// transition-builder function member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transitions {
    pub duration: TransitionDurations,
    pub easing: TransitionEasings,
}

impl Transitions {
    /// Render a CSS `transition` value for the given properties.
    pub fn create(&self, properties: &[&str], options: TransitionOptions) -> String {
        let duration = options.duration_ms.unwrap_or(self.duration.standard);
        let easing = options.easing.unwrap_or(self.easing.ease_in_out);
        properties
            .iter()
            .map(|prop| format!("{prop} {duration}ms {easing} {}ms", options.delay_ms))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Spacing scale, the stand-in for the original theme's spacing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub unit: f32,
}

impl Spacing {
    pub fn px(&self, factor: f32) -> f32 {
        self.unit * factor
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self { unit: 8.0 }
    }
}

/// The full theme contract handed to consumers.
///
/// Every generated descriptor carries the complete field set of the base
/// preset it was assembled from; there is no partial or patched state.
/// Consumers must treat a descriptor as immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeDescriptor {
    pub mode: ThemeMode,
    pub palette: Palette,
    pub roles: Roles,
    pub surfaces: Surfaces,
    pub branding: Branding,
    pub syntax: SyntaxTheme,
    pub images: ImageStyles,
    pub breakpoints: Breakpoints,
    pub transitions: Transitions,
    pub spacing: Spacing,
}
