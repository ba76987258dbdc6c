// SPDX-License-Identifier: MPL-2.0
//! Ease-out interpolation of the displayed ring rotation.
//!
//! The reducer jumps straight to the target rotation; the view shows
//! [`RingAnimation::value_at`] instead, so a step is drawn as a smooth turn
//! lasting the configured transition duration.

use std::time::{Duration, Instant};

/// Cubic ease-out on `t ∈ [0, 1]`.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// An in-flight (or settled) rotation animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl RingAnimation {
    /// A settled animation resting at `value`.
    #[must_use]
    pub fn settled(value: f32, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started: now,
            duration: Duration::ZERO,
        }
    }

    /// Starts a new animation towards `target` from wherever the current one
    /// is at `now`, so interrupted turns never jump.
    pub fn retarget(&mut self, target: f32, now: Instant, duration: Duration) {
        self.from = self.value_at(now);
        self.to = target;
        self.started = now;
        self.duration = duration;
    }

    /// Displayed rotation at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_out(progress)
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[must_use]
    pub fn is_running(&self, now: Instant) -> bool {
        self.from != self.to && now.saturating_duration_since(self.started) < self.duration
    }
}
