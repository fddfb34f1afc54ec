// ABOUTME: Debouncing for color-picker preview regeneration
// ABOUTME: Skips recomputation during a drag; flushes on drag end or after a delay

use std::time::{Duration, Instant};

/// Configuration for debouncing behavior.
#[derive(Debug, Clone)]
pub struct DebounceConfig {
    /// How long to wait after the last input before flushing.
    pub delay: Duration,
    /// Maximum time an input may sit pending before it is flushed anyway.
    pub max_delay: Duration,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(150),
            max_delay: Duration::from_millis(1000),
        }
    }
}

/// Debouncer for theme preview recomputation while the user works a
/// color-picker control.
///
/// Purely advisory: everything runs on the caller's thread and the caller
/// drives it by polling. While a drag is in progress no deadline is armed
/// at all; the pending seed is only surfaced on [`end_drag`](Self::end_drag).
/// Outside a drag, a newer input supersedes the pending one and re-arms
/// the deadline, except that `max_delay` bounds how long a value can be
/// superseded before it flushes.
#[derive(Debug)]
pub struct PreviewDebouncer {
    config: DebounceConfig,
    pending: Option<String>,
    deadline: Option<Instant>,
    first_input: Option<Instant>,
    dragging: bool,
}

impl PreviewDebouncer {
    pub fn new() -> Self {
        Self::with_config(DebounceConfig::default())
    }

    pub fn with_config(config: DebounceConfig) -> Self {
        Self {
            config,
            pending: None,
            deadline: None,
            first_input: None,
            dragging: false,
        }
    }

    /// Mark the start of a picker drag. Pending work stays parked until
    /// the drag ends.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.deadline = None;
    }

    /// Mark the end of a drag, returning the seed that should be
    /// recomputed now, if any input arrived during the drag.
    pub fn end_drag(&mut self) -> Option<String> {
        self.dragging = false;
        self.deadline = None;
        self.first_input = None;
        self.pending.take()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Record a new seed input. Returns the seed immediately when the
    /// max-delay bound has been exceeded; otherwise the input waits for
    /// [`poll`](Self::poll) or [`end_drag`](Self::end_drag).
    pub fn submit(&mut self, seed: impl Into<String>) -> Option<String> {
        let now = Instant::now();
        let first = *self.first_input.get_or_insert(now);
        self.pending = Some(seed.into());

        if self.dragging {
            return None;
        }

        if now.duration_since(first) >= self.config.max_delay {
            self.first_input = None;
            self.deadline = None;
            return self.pending.take();
        }

        self.deadline = Some(now + self.config.delay);
        None
    }

    /// Take the pending seed if its deadline has passed.
    pub fn poll(&mut self) -> Option<String> {
        if self.dragging {
            return None;
        }
        let deadline = self.deadline?;
        if Instant::now() < deadline {
            return None;
        }
        self.deadline = None;
        self.first_input = None;
        self.pending.take()
    }

    /// Drop any pending input without surfacing it.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.deadline = None;
    }

    /// Clear all state, including drag tracking.
    pub fn reset(&mut self) {
        self.cancel();
        self.first_input = None;
        self.dragging = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for PreviewDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    fn fast_config() -> DebounceConfig {
        DebounceConfig {
            delay: Duration::from_millis(10),
            max_delay: Duration::from_millis(50),
        }
    }

    #[test]
    fn flushes_after_delay() {
        let mut debouncer = PreviewDebouncer::with_config(fast_config());
        assert!(debouncer.submit("#ff7a00").is_none());
        assert!(debouncer.is_pending());
        assert!(debouncer.poll().is_none());

        sleep(Duration::from_millis(15));
        assert_eq!(debouncer.poll().as_deref(), Some("#ff7a00"));
        assert!(!debouncer.is_pending());
        assert!(debouncer.poll().is_none());
    }

    #[test]
    fn newer_input_supersedes_pending() {
        let mut debouncer = PreviewDebouncer::with_config(fast_config());
        debouncer.submit("#111111");
        debouncer.submit("#222222");
        sleep(Duration::from_millis(15));
        assert_eq!(debouncer.poll().as_deref(), Some("#222222"));
    }

    #[test]
    fn dragging_suppresses_poll_until_drag_end() {
        let mut debouncer = PreviewDebouncer::with_config(fast_config());
        debouncer.begin_drag();
        debouncer.submit("#111111");
        debouncer.submit("#333333");

        sleep(Duration::from_millis(15));
        assert!(debouncer.poll().is_none());
        assert!(debouncer.is_dragging());

        assert_eq!(debouncer.end_drag().as_deref(), Some("#333333"));
        assert!(!debouncer.is_dragging());
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn end_drag_without_input_is_empty() {
        let mut debouncer = PreviewDebouncer::with_config(fast_config());
        debouncer.begin_drag();
        assert!(debouncer.end_drag().is_none());
    }

    #[test]
    fn max_delay_forces_a_flush() {
        let mut debouncer = PreviewDebouncer::with_config(fast_config());
        assert!(debouncer.submit("#111111").is_none());
        sleep(Duration::from_millis(60));
        // The next input exceeds max_delay since the first, so it flushes
        // immediately instead of waiting out another delay window.
        assert_eq!(debouncer.submit("#444444").as_deref(), Some("#444444"));
    }

    #[test]
    fn cancel_drops_pending_input() {
        let mut debouncer = PreviewDebouncer::with_config(fast_config());
        debouncer.submit("#111111");
        debouncer.cancel();
        sleep(Duration::from_millis(15));
        assert!(debouncer.poll().is_none());
    }

    #[test]
    fn reset_clears_drag_state() {
        let mut debouncer = PreviewDebouncer::with_config(fast_config());
        debouncer.begin_drag();
        debouncer.submit("#111111");
        debouncer.reset();
        assert!(!debouncer.is_dragging());
        assert!(!debouncer.is_pending());
    }
}
