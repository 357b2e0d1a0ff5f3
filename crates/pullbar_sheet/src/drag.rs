//! Drag release resolution
//!
//! Converts continuous drag input plus release velocity into a discrete
//! outcome: a flick to an edge, a settle onto the nearest snap point, or a
//! move to an intermediate coordinate.

use crate::position::Position;
use crate::snap::nearest;

/// Velocity magnitude (points/second) above which a release is a flick.
pub const FLICK_THRESHOLD: f32 = 1500.0;

/// Settle animations never run shorter than this (seconds).
pub const MIN_SETTLE_DURATION: f32 = 0.35;

/// Divisor applied to the viewport height to derive the reference speed for
/// the velocity-independent duration bound.
const VIEWPORT_SPEED_DIVISOR: f32 = 3.5;

/// Live bookkeeping for one drag gesture.
#[derive(Clone, Copy, Debug)]
pub struct DragState {
    start_y: f32,
}

impl DragState {
    /// Capture the sheet offset at gesture start.
    pub fn new(start_y: f32) -> Self {
        Self { start_y }
    }

    pub fn start_y(&self) -> f32 {
        self.start_y
    }
}

/// What a drag release resolved to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReleaseAction {
    /// Transition to the fully-open position
    Expand,
    /// Transition to the fully-closed position
    Shrink,
    /// Animate to an intermediate snap coordinate
    SettleTo { target: f32, duration: f32 },
}

/// Resolve a drag release into an action.
///
/// Flicks win first: a fast release toward an edge ignores the current
/// offset entirely. Below the threshold the nearest snap coordinate decides,
/// with edge coordinates mapping onto the expand/shrink transitions.
pub fn resolve_release(
    offset_y: f32,
    velocity_y: f32,
    position: Position,
    resolved: &[f32],
    min_y: f32,
    max_y: f32,
    viewport_height: f32,
) -> ReleaseAction {
    if velocity_y > FLICK_THRESHOLD && position.is_expand() {
        return ReleaseAction::Shrink;
    }
    if velocity_y < -FLICK_THRESHOLD && position.is_shrink() {
        return ReleaseAction::Expand;
    }

    let fallback = [min_y, max_y];
    let target = nearest(resolved, offset_y)
        .or_else(|| nearest(&fallback, offset_y))
        .unwrap_or(max_y);

    if target == min_y {
        ReleaseAction::Expand
    } else if target == max_y {
        ReleaseAction::Shrink
    } else {
        ReleaseAction::SettleTo {
            target,
            duration: settle_duration(offset_y - target, velocity_y, viewport_height),
        }
    }
}

/// Velocity-scaled settle duration in seconds.
///
/// `min(|d| / |v|, |d| / (viewport_height / 3.5))` floored at
/// [`MIN_SETTLE_DURATION`]: proportional to how fast the user was dragging,
/// bounded by a viewport-relative reference speed, never shorter than the
/// floor.
pub fn settle_duration(distance: f32, velocity_y: f32, viewport_height: f32) -> f32 {
    let distance = distance.abs();
    if distance <= f32::EPSILON {
        return MIN_SETTLE_DURATION;
    }

    let speed = velocity_y.abs();
    let by_velocity = if speed > f32::EPSILON {
        distance / speed
    } else {
        f32::INFINITY
    };

    let reference_speed = viewport_height / VIEWPORT_SPEED_DIVISOR;
    let by_viewport = if reference_speed > f32::EPSILON {
        distance / reference_speed
    } else {
        f32::INFINITY
    };

    let duration = by_velocity.min(by_viewport);
    if duration.is_finite() {
        duration.max(MIN_SETTLE_DURATION)
    } else {
        MIN_SETTLE_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESOLVED: [f32; 2] = [44.0, 760.0];

    #[test]
    fn flick_down_from_expand_shrinks() {
        let action = resolve_release(100.0, 2000.0, Position::Expand, &RESOLVED, 44.0, 760.0, 844.0);
        assert_eq!(action, ReleaseAction::Shrink);
    }

    #[test]
    fn flick_up_from_shrink_expands() {
        let action = resolve_release(700.0, -2000.0, Position::Shrink, &RESOLVED, 44.0, 760.0, 844.0);
        assert_eq!(action, ReleaseAction::Expand);
    }

    #[test]
    fn flick_from_custom_position_falls_through_to_nearest() {
        let action = resolve_release(
            100.0,
            2000.0,
            Position::Custom(100.0),
            &RESOLVED,
            44.0,
            760.0,
            844.0,
        );
        assert_eq!(action, ReleaseAction::Expand);
    }

    #[test]
    fn sub_threshold_velocity_resolves_by_distance() {
        let action = resolve_release(700.0, 200.0, Position::Expand, &RESOLVED, 44.0, 760.0, 844.0);
        assert_eq!(action, ReleaseAction::Shrink);
    }

    #[test]
    fn mid_grid_target_settles_to_custom() {
        let resolved = [44.0, 400.0, 760.0];
        let action = resolve_release(
            390.0,
            200.0,
            Position::Shrink,
            &resolved,
            44.0,
            760.0,
            844.0,
        );
        match action {
            ReleaseAction::SettleTo { target, duration } => {
                assert_eq!(target, 400.0);
                assert_eq!(duration, MIN_SETTLE_DURATION);
            }
            other => panic!("expected SettleTo, got {:?}", other),
        }
    }

    #[test]
    fn empty_candidates_fall_back_to_the_edge_pair() {
        let action = resolve_release(100.0, 0.0, Position::Shrink, &[], 44.0, 760.0, 844.0);
        assert_eq!(action, ReleaseAction::Expand);
    }

    #[test]
    fn duration_scales_with_velocity_but_floors() {
        // Fast drag: velocity bound is tiny, floor wins
        assert_eq!(settle_duration(100.0, 4000.0, 844.0), MIN_SETTLE_DURATION);

        // Slow drag over a long distance: viewport bound wins
        let duration = settle_duration(500.0, 10.0, 844.0);
        assert!((duration - 500.0 / (844.0 / 3.5)).abs() < 1e-4);
    }

    #[test]
    fn duration_handles_degenerate_inputs() {
        assert_eq!(settle_duration(0.0, 0.0, 844.0), MIN_SETTLE_DURATION);
        assert_eq!(settle_duration(100.0, 0.0, 0.0), MIN_SETTLE_DURATION);
    }
}
