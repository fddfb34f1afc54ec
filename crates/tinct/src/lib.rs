// ABOUTME: Theming subsystem facade: persisted preference, manager, and debouncer
// ABOUTME: Consumers resolve themes here; resolution never blocks rendering

pub mod debounce;
pub mod manager;
pub mod preference;

#[cfg(test)]
mod tests;

pub use debounce::{DebounceConfig, PreviewDebouncer};
pub use manager::{ApplyError, PRESET_SEEDS, ThemeListener, ThemeManager, ThemeUpdated};
pub use preference::{AppearancePreference, ModePreference, PreferenceError, PreferenceStore};

// Re-export the generation core so most consumers need only this crate
pub use tinct_theme::{
    DEFAULT_SEED, GenerationError, ThemeCache, ThemeDescriptor, generate,
};
pub use tinct_types::{Hsl, Rgb, ThemeMode};
