// ABOUTME: End-to-end lifecycle tests: picker input through debouncer, manager,
// ABOUTME: persistence, and back out as resolved descriptors

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tempfile::tempdir;

use crate::debounce::{DebounceConfig, PreviewDebouncer};
use crate::manager::{PRESET_SEEDS, ThemeManager};
use crate::preference::{ModePreference, PreferenceStore};
use tinct_theme::{ThemeDescriptor, ThemeMode, generate};

fn manager_in(dir: &std::path::Path) -> ThemeManager {
    ThemeManager::new(PreferenceStore::with_path(dir.join("appearance.json")))
}

#[test]
fn drag_to_apply_pipeline() {
    let dir = tempdir().unwrap();
    let manager = manager_in(dir.path());
    let mut debouncer = PreviewDebouncer::with_config(DebounceConfig {
        delay: Duration::from_millis(5),
        max_delay: Duration::from_millis(100),
    });

    // User drags across several colors; nothing regenerates mid-drag.
    debouncer.begin_drag();
    for seed in ["#102030", "#405060", "#FF7A00"] {
        debouncer.submit(seed);
        assert!(debouncer.poll().is_none());
    }

    // Drag end surfaces the final color, which the app applies.
    let seed = debouncer.end_drag().unwrap();
    manager.apply_custom(&seed).unwrap();

    let theme = manager.resolve_for_mode(ThemeMode::Light);
    assert_eq!(*theme, generate("#FF7A00", ThemeMode::Light).unwrap());
}

#[test]
fn full_lifecycle_apply_reset_reapply() {
    let dir = tempdir().unwrap();
    let manager = manager_in(dir.path());
    let updates = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&updates);
    manager.subscribe(Arc::new(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    }));

    // No custom theme: both modes resolve to the built-in presets.
    assert_eq!(
        *manager.resolve_for_mode(ThemeMode::Dark),
        ThemeDescriptor::dark()
    );

    // Preset select moves into the custom state.
    manager.apply_preset(0).unwrap();
    assert_eq!(manager.custom_seed().as_deref(), Some(PRESET_SEEDS[0]));
    let custom = manager.resolve_for_mode(ThemeMode::Dark);
    assert_ne!(*custom, ThemeDescriptor::dark());

    // Reset restores the exact base preset and clears persistence.
    manager.reset().unwrap();
    assert_eq!(
        *manager.resolve_for_mode(ThemeMode::Dark),
        ThemeDescriptor::dark()
    );
    let fresh_store = PreferenceStore::with_path(dir.path().join("appearance.json"));
    assert!(fresh_store.load().custom_seed.is_none());

    // A new color re-enters the custom state.
    manager.apply_custom("#00C853").unwrap();
    assert!(manager.has_custom_theme());

    assert_eq!(updates.load(Ordering::SeqCst), 3);
}

#[test]
fn persisted_seed_survives_restart() {
    let dir = tempdir().unwrap();
    {
        let manager = manager_in(dir.path());
        manager.apply_custom("#9C27B0").unwrap();
        manager.set_mode_preference(ModePreference::Light).unwrap();
    }

    // "Restart": a fresh manager over the same store.
    let manager = manager_in(dir.path());
    assert_eq!(manager.custom_seed().as_deref(), Some("#9C27B0"));
    assert_eq!(manager.effective_mode(), ThemeMode::Light);

    // Structural equality across restarts; identity is not guaranteed and
    // not promised.
    let theme = manager.resolve();
    assert_eq!(*theme, generate("#9C27B0", ThemeMode::Light).unwrap());
}

#[test]
fn preset_seeds_generate_in_both_modes() {
    for seed in PRESET_SEEDS {
        for mode in ThemeMode::ALL {
            let theme = generate(seed, mode).unwrap();
            assert_eq!(theme.mode, mode);
        }
    }
}
