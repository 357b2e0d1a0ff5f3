//! Animation scheduler
//!
//! Holds all live tweens and advances them each frame. The host's frame pump
//! supplies `dt`; there is no internal clock and no background thread, so a
//! paused host simply stops time.

use crate::tween::Tween;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct TweenId;
}

/// The animation scheduler that ticks all active tweens
pub struct AnimationScheduler {
    tweens: SlotMap<TweenId, Tween>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            tweens: SlotMap::with_key(),
        }
    }

    pub fn add_tween(&mut self, tween: Tween) -> TweenId {
        let id = self.tweens.insert(tween);
        tracing::trace!(?id, "tween added");
        id
    }

    pub fn get_tween(&self, id: TweenId) -> Option<&Tween> {
        self.tweens.get(id)
    }

    pub fn get_tween_mut(&mut self, id: TweenId) -> Option<&mut Tween> {
        self.tweens.get_mut(id)
    }

    pub fn remove_tween(&mut self, id: TweenId) -> Option<Tween> {
        tracing::trace!(?id, "tween removed");
        self.tweens.remove(id)
    }

    /// Advance all tweens by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        for (_, tween) in self.tweens.iter_mut() {
            tween.tick(dt);
        }
    }

    /// Check if any tween is still running
    pub fn has_active_animations(&self) -> bool {
        self.tweens.iter().any(|(_, t)| !t.is_finished())
    }

    /// Get the number of tweens in the scheduler
    pub fn tween_count(&self) -> usize {
        self.tweens.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
