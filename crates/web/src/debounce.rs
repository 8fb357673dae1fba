// =============================================================================
// GS-IT Web - Debounce Utility
// =============================================================================
// Table of Contents:
// 1. Options
// 2. Timer-Reset Bookkeeping
// 3. Browser Debouncer
// 4. Tests
// =============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

// -----------------------------------------------------------------------------
// 1. Options
// -----------------------------------------------------------------------------

/// How a debounced callback fires relative to a burst of calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceOptions {
    /// Quiet period that closes a burst.
    pub wait_ms: u32,
    /// Fire on the first call of a burst.
    pub leading: bool,
    /// Fire once the burst has been quiet for `wait_ms`.
    pub trailing: bool,
}

impl Default for DebounceOptions {
    fn default() -> Self {
        Self {
            wait_ms: 100,
            leading: false,
            trailing: true,
        }
    }
}

impl DebounceOptions {
    pub fn wait_ms(mut self, wait_ms: u32) -> Self {
        self.wait_ms = wait_ms;
        self
    }

    pub fn leading(mut self, leading: bool) -> Self {
        self.leading = leading;
        self
    }

    pub fn trailing(mut self, trailing: bool) -> Self {
        self.trailing = trailing;
        self
    }
}

// -----------------------------------------------------------------------------
// 2. Timer-Reset Bookkeeping
// -----------------------------------------------------------------------------

/// Clock-free debounce state. The owner supplies the timer and reports
/// expiry through [`DebounceState::on_timeout`].
#[derive(Clone, Debug)]
pub struct DebounceState {
    options: DebounceOptions,
    /// A burst is in progress (timer running).
    active: bool,
    /// At least one call in this burst has not been delivered yet.
    pending: bool,
}

impl DebounceState {
    pub fn new(options: DebounceOptions) -> Self {
        Self {
            options,
            active: false,
            pending: false,
        }
    }

    pub fn options(&self) -> DebounceOptions {
        self.options
    }

    /// Whether a quiet-period timer should currently be running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Register a call. Every call resets the quiet period, so the owner
    /// restarts its timer each time. Returns whether to fire now (leading
    /// edge).
    pub fn on_call(&mut self) -> bool {
        let starts_burst = !self.active;
        self.active = true;

        let fire_now = starts_burst && self.options.leading;
        if !fire_now {
            self.pending = true;
        }

        fire_now
    }

    /// The quiet period elapsed. Returns whether the trailing call is due.
    pub fn on_timeout(&mut self) -> bool {
        let fire = self.active && self.pending && self.options.trailing;
        self.active = false;
        self.pending = false;
        fire
    }

    /// Drop the current burst without firing.
    pub fn cancel(&mut self) {
        self.active = false;
        self.pending = false;
    }
}

// -----------------------------------------------------------------------------
// 3. Browser Debouncer
// -----------------------------------------------------------------------------

struct Inner {
    state: DebounceState,
    timer: Option<Timeout>,
}

/// Debounced callback driven by `setTimeout`.
///
/// Cloning shares the same timer. The pending timer is cancelled by
/// [`Debounced::cancel`] or when the last clone is dropped.
#[derive(Clone)]
pub struct Debounced {
    inner: Rc<RefCell<Inner>>,
    callback: Rc<dyn Fn()>,
}

impl Debounced {
    pub fn new(options: DebounceOptions, callback: impl Fn() + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: DebounceState::new(options),
                timer: None,
            })),
            callback: Rc::new(callback),
        }
    }

    /// Register a call; fires now and/or after the quiet period per the options.
    pub fn call(&self) {
        let fire_now = self.inner.borrow_mut().state.on_call();

        let wait_ms = self.inner.borrow().state.options().wait_ms;
        let weak = Rc::downgrade(&self.inner);
        let callback = Rc::clone(&self.callback);
        let timeout = Timeout::new(wait_ms, move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            // The spent handle stays in `timer` until the next call
            // replaces it; dropping it here would free this closure.
            let fire = inner.borrow_mut().state.on_timeout();
            if fire {
                callback();
            }
        });
        // Replacing the handle drops (and clears) the previous timeout.
        self.inner.borrow_mut().timer = Some(timeout);

        if fire_now {
            (self.callback)();
        }
    }

    /// Cancel any pending trailing call.
    pub fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.state.cancel();
        if let Some(timer) = inner.timer.take() {
            let _ = timer.cancel();
        }
    }
}

// -----------------------------------------------------------------------------
// 4. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_only_collapses_burst() {
        let mut state = DebounceState::new(DebounceOptions::default());

        for _ in 0..5 {
            assert!(!state.on_call());
            assert!(state.is_active());
        }

        assert!(state.on_timeout());
        assert!(!state.is_active());
        // A stray expiry after the burst does nothing.
        assert!(!state.on_timeout());
    }

    #[test]
    fn test_leading_only_fires_once_per_burst() {
        let options = DebounceOptions::default().leading(true).trailing(false);
        let mut state = DebounceState::new(options);

        assert!(state.on_call());
        assert!(!state.on_call());
        assert!(!state.on_call());
        assert!(!state.on_timeout());

        // Next burst fires on its first call again.
        assert!(state.on_call());
    }

    #[test]
    fn test_leading_and_trailing() {
        let options = DebounceOptions::default().leading(true).trailing(true);
        let mut state = DebounceState::new(options);

        // A single call fires on the leading edge only.
        assert!(state.on_call());
        assert!(!state.on_timeout());

        // A burst fires on both edges.
        assert!(state.on_call());
        assert!(!state.on_call());
        assert!(state.on_timeout());
    }

    #[test]
    fn test_cancel_drops_pending_call() {
        let mut state = DebounceState::new(DebounceOptions::default());
        state.on_call();
        state.cancel();

        assert!(!state.is_active());
        assert!(!state.on_timeout());
    }

    #[test]
    fn test_builder_sets_wait() {
        let options = DebounceOptions::default().wait_ms(250);
        assert_eq!(options.wait_ms, 250);
        assert!(options.trailing);
        assert!(!options.leading);
    }
}
