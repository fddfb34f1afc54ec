// ABOUTME: Theme generation core: palette derivation, contrast math, presets,
// ABOUTME: descriptor assembly, and the seed-keyed theme cache

pub mod contrast;
pub mod descriptor;
pub mod generator;
pub mod palette;
pub mod presets;
pub mod syntax;

// Re-export the main surface
pub use descriptor::{
    Breakpoint, Breakpoints, Palette, PaletteColor, RoleColors, Roles, Spacing, SurfaceStyle,
    Surfaces, ThemeDescriptor, TransitionOptions, Transitions,
};
pub use generator::{DEFAULT_SEED, GenerationError, ThemeCache, generate, generate_from_rgb};
pub use palette::{ColorPalette, SeedProfile};
pub use syntax::SyntaxTheme;

// Downstream crates get the value types from one place
pub use tinct_types::{Hsl, Rgb, ThemeMode};
