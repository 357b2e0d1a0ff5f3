//! Timed scalar tweens
//!
//! A tween animates a single value toward a single target over a fixed
//! duration with an easing curve. A sheet settle is exactly one of these;
//! there is no keyframe list.

use crate::easing::Easing;

/// A timed scalar animation from `from` to `to`.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    /// Duration in seconds
    duration: f32,
    easing: Easing,
    elapsed: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            easing,
            elapsed: 0.0,
        }
    }

    /// Animation target value
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Fraction of the duration elapsed, clamped to [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= f32::EPSILON {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Current eased value
    pub fn value(&self) -> f32 {
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Advance by `dt` seconds. Returns whether the tween is still running.
    ///
    /// A zero-duration tween completes on its first tick.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.is_finished() {
            return false;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);
        !self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
