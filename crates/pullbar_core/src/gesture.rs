//! Gesture input model
//!
//! Plain-data events delivered by the host's gesture recognizers. The sheet
//! never talks to the input system directly; the platform layer translates
//! its native events into these and forwards them.

/// Phase of a continuous drag gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    /// Finger down, gesture recognized
    Began,
    /// Translation updated
    Changed,
    /// Finger lifted
    Ended,
}

/// A single drag gesture frame.
///
/// `translation_y` is cumulative since the gesture began; `velocity_y` is the
/// instantaneous vertical velocity in points per second, positive downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEvent {
    pub translation_y: f32,
    pub velocity_y: f32,
    pub phase: DragPhase,
}

impl DragEvent {
    /// Gesture start frame
    pub const fn began() -> Self {
        Self {
            translation_y: 0.0,
            velocity_y: 0.0,
            phase: DragPhase::Began,
        }
    }

    /// Incremental update frame
    pub const fn changed(translation_y: f32) -> Self {
        Self {
            translation_y,
            velocity_y: 0.0,
            phase: DragPhase::Changed,
        }
    }

    /// Release frame with the final translation and release velocity
    pub const fn ended(translation_y: f32, velocity_y: f32) -> Self {
        Self {
            translation_y,
            velocity_y,
            phase: DragPhase::Ended,
        }
    }
}

/// Observation of a nested scroll view's state at notification time.
///
/// `velocity_y > 0` means the content is being dragged back toward its own
/// top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NestedScrollEvent {
    pub offset_y: f32,
    pub velocity_y: f32,
}
