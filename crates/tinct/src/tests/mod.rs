// ABOUTME: Test module organization for the theming facade
// ABOUTME: Covers the full preference lifecycle across manager, store, and cache

pub mod lifecycle_tests;
