//! Time-on-page offsets and elapsed-time arithmetic.

#[cfg(test)]
#[path = "milestones_test.rs"]
mod milestones_test;

/// Seconds after load at which a `time_milestone` event is emitted.
pub const TIME_MILESTONES_SECS: [u32; 4] = [30, 60, 120, 300];

/// Milliseconds from `started_at_ms` to `now_ms`, rounded, never negative.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn elapsed_ms(started_at_ms: f64, now_ms: f64) -> u64 {
    let elapsed = now_ms - started_at_ms;
    if !elapsed.is_finite() || elapsed <= 0.0 {
        return 0;
    }
    elapsed.round() as u64
}

/// Whole seconds from `started_at_ms` to `now_ms`, rounded to nearest.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn elapsed_secs(started_at_ms: f64, now_ms: f64) -> u64 {
    let elapsed = now_ms - started_at_ms;
    if !elapsed.is_finite() || elapsed <= 0.0 {
        return 0;
    }
    (elapsed / 1000.0).round() as u64
}

/// Timer delay for a milestone, in milliseconds.
#[must_use]
pub fn delay_ms(seconds: u32) -> u32 {
    seconds.saturating_mul(1000)
}
