//! Leading-edge rate limiter.
//!
//! The first signal in a window is admitted immediately and arms a cooldown;
//! further signals are dropped until the host's cooldown timer calls
//! [`Throttle::release`]. The limiter never re-arms on its own, so a host
//! that forgets to schedule the release simply stops admitting signals.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

/// Cooldown window for scroll signals, in milliseconds.
pub const SCROLL_THROTTLE_MS: u32 = 250;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Throttle {
    interval_ms: u32,
    cooling: bool,
}

impl Throttle {
    #[must_use]
    pub fn new(interval_ms: u32) -> Self {
        Self { interval_ms, cooling: false }
    }

    /// Length of the cooldown window the host should schedule after an admit.
    #[must_use]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Admit a signal. Returns `true` when the caller should run its handler
    /// and schedule [`Throttle::release`] after [`Throttle::interval_ms`].
    pub fn admit(&mut self) -> bool {
        if self.cooling {
            return false;
        }
        self.cooling = true;
        true
    }

    /// End the cooldown. Called by the host's cooldown timer.
    pub fn release(&mut self) {
        self.cooling = false;
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(SCROLL_THROTTLE_MS)
    }
}
