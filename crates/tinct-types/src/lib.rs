// ABOUTME: Pure color and appearance types with no cross-crate dependencies
// ABOUTME: Foundation layer for all other tinct crates

pub mod color;
pub mod mode;

// Re-export commonly used types
pub use color::{ColorParseError, Hsl, Rgb, hsl};
pub use mode::ThemeMode;
