// ABOUTME: Theme manager owning the cache, the persisted preference, and listeners
// ABOUTME: Resolution never fails: generation errors degrade to the base preset

use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use tinct_logging::{error, info, warn};
use tinct_theme::{GenerationError, Rgb, ThemeCache, ThemeDescriptor, ThemeMode};
use tinct_types::ColorParseError;

use crate::preference::{AppearancePreference, ModePreference, PreferenceError, PreferenceStore};

/// The six built-in preset seeds offered in the appearance form.
pub const PRESET_SEEDS: [&str; 6] = [
    "#6A36FC", // Purple
    "#F74B4B", // Red
    "#00A3FF", // Blue
    "#00C853", // Green
    "#FF7A00", // Orange
    "#9C27B0", // Deep Purple
];

/// Broadcast when the effective theme changes. Carries no payload;
/// consumers re-read manager state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeUpdated;

pub type ThemeListener = Arc<dyn Fn(ThemeUpdated) + Send + Sync>;

/// Errors from explicit user actions. The read path ([`ThemeManager::resolve`])
/// never surfaces these.
#[derive(Debug, Error)]
pub enum ApplyError {
    #[error(transparent)]
    InvalidSeed(#[from] ColorParseError),
    #[error("no preset at index {0}")]
    UnknownPreset(usize),
    #[error(transparent)]
    Store(#[from] PreferenceError),
}

/// Owner of the theming subsystem state.
///
/// Preference lifecycle: no custom theme → custom theme applied (apply or
/// preset-select) → back to no custom theme (reset), repeatable. The only
/// persisted value is the seed color plus the mode preference.
pub struct ThemeManager {
    cache: ThemeCache,
    store: PreferenceStore,
    preference: RwLock<AppearancePreference>,
    system_scheme: RwLock<ThemeMode>,
    listeners: RwLock<Vec<ThemeListener>>,
    base_light: Arc<ThemeDescriptor>,
    base_dark: Arc<ThemeDescriptor>,
}

impl ThemeManager {
    /// Create a manager over the given store, reading the persisted
    /// preference once.
    pub fn new(store: PreferenceStore) -> Self {
        let preference = store.load();
        info!(
            has_custom_theme = preference.has_custom_theme(),
            mode = ?preference.mode,
            "theme manager initialized"
        );
        Self {
            cache: ThemeCache::new(),
            store,
            preference: RwLock::new(preference),
            system_scheme: RwLock::new(ThemeMode::Dark),
            listeners: RwLock::new(Vec::new()),
            base_light: Arc::new(ThemeDescriptor::light()),
            base_dark: Arc::new(ThemeDescriptor::dark()),
        }
    }

    /// Record the system color scheme used by the `Auto` preference.
    pub fn set_system_scheme(&self, scheme: ThemeMode) {
        let changed = {
            let mut current = self.system_scheme.write();
            let changed = *current != scheme;
            *current = scheme;
            changed
        };
        if changed {
            self.notify();
        }
    }

    pub fn mode_preference(&self) -> ModePreference {
        self.preference.read().mode
    }

    /// The mode the manager will currently resolve to.
    pub fn effective_mode(&self) -> ThemeMode {
        self.preference.read().mode.resolve(*self.system_scheme.read())
    }

    pub fn has_custom_theme(&self) -> bool {
        self.preference.read().has_custom_theme()
    }

    /// The custom seed, if one is applied.
    pub fn custom_seed(&self) -> Option<String> {
        self.preference.read().custom_seed.clone()
    }

    /// Resolve the theme for the effective mode. Never fails.
    pub fn resolve(&self) -> Arc<ThemeDescriptor> {
        self.resolve_for_mode(self.effective_mode())
    }

    /// Resolve the theme for an explicit mode.
    ///
    /// A custom seed that fails generation is logged, purged from
    /// persistence when the failure would repeat on reload, and replaced
    /// by the base preset — theming must never block rendering.
    pub fn resolve_for_mode(&self, mode: ThemeMode) -> Arc<ThemeDescriptor> {
        let seed = self.preference.read().custom_seed.clone();
        let Some(seed) = seed else {
            return self.base_preset(mode);
        };

        match self.cache.get_or_generate(&seed, mode) {
            Ok(theme) => theme,
            Err(generation_error) => {
                error!(
                    seed = %seed,
                    %mode,
                    error = %generation_error,
                    "theme generation failed, falling back to base preset"
                );
                if generation_error.is_persistent() {
                    self.purge_custom_seed(&generation_error);
                }
                self.base_preset(mode)
            }
        }
    }

    /// Apply a custom seed color. Validates, persists, and notifies.
    pub fn apply_custom(&self, seed: &str) -> Result<(), ApplyError> {
        let seed = seed.trim();
        Rgb::from_hex(seed)?;

        {
            let mut preference = self.preference.write();
            preference.custom_seed = Some(seed.to_string());
            self.store.save(&preference)?;
        }
        info!(seed, "custom theme applied");
        self.notify();
        Ok(())
    }

    /// Apply one of the built-in preset seeds.
    pub fn apply_preset(&self, index: usize) -> Result<(), ApplyError> {
        let seed = PRESET_SEEDS
            .get(index)
            .ok_or(ApplyError::UnknownPreset(index))?;
        self.apply_custom(seed)
    }

    /// Drop the custom theme; subsequent resolution yields the base preset.
    pub fn reset(&self) -> Result<(), ApplyError> {
        {
            let mut preference = self.preference.write();
            preference.custom_seed = None;
            self.store.save(&preference)?;
        }
        info!("custom theme reset");
        self.notify();
        Ok(())
    }

    /// Change the light/dark/auto preference.
    pub fn set_mode_preference(&self, mode: ModePreference) -> Result<(), ApplyError> {
        {
            let mut preference = self.preference.write();
            preference.mode = mode;
            self.store.save(&preference)?;
        }
        self.notify();
        Ok(())
    }

    /// Register a change listener. Listeners are invoked synchronously on
    /// every apply/reset/preference change.
    pub fn subscribe(&self, listener: ThemeListener) {
        self.listeners.write().push(listener);
    }

    fn base_preset(&self, mode: ThemeMode) -> Arc<ThemeDescriptor> {
        match mode {
            ThemeMode::Light => Arc::clone(&self.base_light),
            ThemeMode::Dark => Arc::clone(&self.base_dark),
        }
    }

    /// Remove a stored seed that will keep failing, so the next startup
    /// does not trip over it again.
    fn purge_custom_seed(&self, cause: &GenerationError) {
        warn!(error = %cause, "purging persisted custom seed");
        let mut preference = self.preference.write();
        preference.custom_seed = None;
        if let Err(save_error) = self.store.save(&preference) {
            warn!(error = %save_error, "could not persist purged preference");
        }
    }

    fn notify(&self) {
        let listeners = self.listeners.read();
        for listener in listeners.iter() {
            listener(ThemeUpdated);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    fn manager_in(dir: &std::path::Path) -> ThemeManager {
        ThemeManager::new(PreferenceStore::with_path(dir.join("appearance.json")))
    }

    #[test]
    fn defaults_to_dark_preset() {
        let dir = tempdir().unwrap();
        let manager = manager_in(dir.path());
        assert!(!manager.has_custom_theme());
        let theme = manager.resolve();
        assert_eq!(*theme, ThemeDescriptor::dark());
    }

    #[test]
    fn apply_custom_switches_and_persists() {
        let dir = tempdir().unwrap();
        let manager = manager_in(dir.path());
        manager.apply_custom("#FF7A00").unwrap();
        assert!(manager.has_custom_theme());

        let theme = manager.resolve();
        assert_ne!(*theme, ThemeDescriptor::dark());

        // A second manager over the same store sees the persisted seed.
        let reloaded = manager_in(dir.path());
        assert_eq!(reloaded.custom_seed().as_deref(), Some("#FF7A00"));
    }

    #[test]
    fn repeated_resolution_shares_the_descriptor() {
        let dir = tempdir().unwrap();
        let manager = manager_in(dir.path());
        manager.apply_custom("#00A3FF").unwrap();
        let a = manager.resolve();
        let b = manager.resolve();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn preset_then_reset_restores_base_theme() {
        let dir = tempdir().unwrap();
        let manager = manager_in(dir.path());
        manager.apply_preset(4).unwrap(); // orange
        assert_eq!(manager.custom_seed().as_deref(), Some("#FF7A00"));

        manager.reset().unwrap();
        assert!(!manager.has_custom_theme());
        assert_eq!(*manager.resolve(), ThemeDescriptor::dark());
        assert_eq!(
            *manager.resolve_for_mode(ThemeMode::Light),
            ThemeDescriptor::light()
        );

        let store = PreferenceStore::with_path(dir.path().join("appearance.json"));
        assert_eq!(store.load().custom_seed, None);
    }

    #[test]
    fn unknown_preset_index_is_an_error() {
        let dir = tempdir().unwrap();
        let manager = manager_in(dir.path());
        assert!(matches!(
            manager.apply_preset(6),
            Err(ApplyError::UnknownPreset(6))
        ));
    }

    #[test]
    fn invalid_seed_is_rejected_on_apply() {
        let dir = tempdir().unwrap();
        let manager = manager_in(dir.path());
        assert!(matches!(
            manager.apply_custom("not-a-color"),
            Err(ApplyError::InvalidSeed(_))
        ));
        assert!(!manager.has_custom_theme());
    }

    #[test]
    fn corrupt_persisted_seed_degrades_and_purges() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("appearance.json");
        std::fs::write(
            &path,
            r##"{"mode":"dark","custom_seed":"not-a-color"}"##,
        )
        .unwrap();

        let manager = ThemeManager::new(PreferenceStore::with_path(&path));
        assert!(manager.has_custom_theme());

        // Resolution does not error and falls back to the base preset.
        let theme = manager.resolve();
        assert_eq!(*theme, ThemeDescriptor::dark());

        // The bad seed is gone from memory and from disk.
        assert!(!manager.has_custom_theme());
        let store = PreferenceStore::with_path(&path);
        assert_eq!(store.load().custom_seed, None);
    }

    #[test]
    fn auto_mode_follows_system_scheme() {
        let dir = tempdir().unwrap();
        let manager = manager_in(dir.path());
        manager.set_mode_preference(ModePreference::Auto).unwrap();

        manager.set_system_scheme(ThemeMode::Light);
        assert_eq!(manager.effective_mode(), ThemeMode::Light);
        assert_eq!(manager.resolve().mode, ThemeMode::Light);

        manager.set_system_scheme(ThemeMode::Dark);
        assert_eq!(manager.effective_mode(), ThemeMode::Dark);
    }

    #[test]
    fn listeners_hear_apply_and_reset() {
        let dir = tempdir().unwrap();
        let manager = manager_in(dir.path());
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        manager.subscribe(Arc::new(move |_event| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        manager.apply_custom("#00C853").unwrap();
        manager.reset().unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn preset_seeds_all_parse() {
        for seed in PRESET_SEEDS {
            assert!(Rgb::from_hex(seed).is_ok(), "{seed}");
        }
    }
}
