//! Snap points and the nearest-point resolver
//!
//! A snap point is a designated resting y-coordinate the sheet can settle
//! at. `Min` and `Max` track the safe-area edges of the current viewport;
//! `Custom` pins an explicit coordinate. The active set is kept sorted so
//! the smallest and largest resolved coordinates bound the draggable range.

use pullbar_core::geometry::ViewportGeometry;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Margin reserved below `Max` so the header stays grippable at the bottom.
pub const EDGE_MARGIN: f32 = 50.0;

/// A vertical resting position for the sheet.
#[derive(Clone, Copy, Debug)]
pub enum SnapPoint {
    /// Top of the pullable range: the top safe-area inset
    Min,
    /// Bottom of the pullable range: viewport height minus the bottom
    /// safe-area inset minus [`EDGE_MARGIN`]
    Max,
    /// An explicit y-coordinate
    Custom(f32),
}

impl SnapPoint {
    /// Resolve to a concrete y-coordinate for the given viewport.
    pub fn resolve(&self, geometry: &ViewportGeometry) -> f32 {
        match self {
            SnapPoint::Min => geometry.safe_area_top,
            SnapPoint::Max => geometry.height - geometry.safe_area_bottom - EDGE_MARGIN,
            SnapPoint::Custom(y) => *y,
        }
    }

    /// Total order: `Min` sorts first, `Max` last, customs by offset.
    pub fn total_cmp(&self, other: &SnapPoint) -> Ordering {
        match (self, other) {
            (SnapPoint::Min, SnapPoint::Min) => Ordering::Equal,
            (SnapPoint::Max, SnapPoint::Max) => Ordering::Equal,
            (SnapPoint::Min, _) => Ordering::Less,
            (_, SnapPoint::Min) => Ordering::Greater,
            (SnapPoint::Max, _) => Ordering::Greater,
            (_, SnapPoint::Max) => Ordering::Less,
            (SnapPoint::Custom(a), SnapPoint::Custom(b)) => a.total_cmp(b),
        }
    }
}

impl PartialEq for SnapPoint {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SnapPoint::Min, SnapPoint::Min) => true,
            (SnapPoint::Max, SnapPoint::Max) => true,
            (SnapPoint::Custom(a), SnapPoint::Custom(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for SnapPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.total_cmp(other))
    }
}

/// The active snap-point set, re-sorted on every write.
///
/// An empty grid is legal: range queries fall back to the resolved
/// `Min`/`Max` pair so the sheet always has a draggable range.
#[derive(Clone, Debug)]
pub struct SnapGrid {
    points: SmallVec<[SnapPoint; 4]>,
}

impl Default for SnapGrid {
    fn default() -> Self {
        Self::new([SnapPoint::Min, SnapPoint::Max])
    }
}

impl SnapGrid {
    pub fn new(points: impl IntoIterator<Item = SnapPoint>) -> Self {
        let mut grid = Self {
            points: SmallVec::new(),
        };
        grid.set(points);
        grid
    }

    /// Replace the set; the new points are sorted on assignment.
    pub fn set(&mut self, points: impl IntoIterator<Item = SnapPoint>) {
        self.points = points.into_iter().collect();
        self.points.sort_by(SnapPoint::total_cmp);
    }

    pub fn points(&self) -> &[SnapPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All coordinates for the given viewport, ascending.
    pub fn resolved(&self, geometry: &ViewportGeometry) -> SmallVec<[f32; 4]> {
        self.points.iter().map(|p| p.resolve(geometry)).collect()
    }

    /// Smallest resolved coordinate (top of the pullable range).
    pub fn pullable_min_y(&self, geometry: &ViewportGeometry) -> f32 {
        self.points
            .iter()
            .map(|p| p.resolve(geometry))
            .reduce(f32::min)
            .unwrap_or_else(|| SnapPoint::Min.resolve(geometry))
    }

    /// Largest resolved coordinate (bottom of the pullable range).
    pub fn pullable_max_y(&self, geometry: &ViewportGeometry) -> f32 {
        self.points
            .iter()
            .map(|p| p.resolve(geometry))
            .reduce(f32::max)
            .unwrap_or_else(|| SnapPoint::Max.resolve(geometry))
    }
}

/// Find the candidate closest to `target`.
///
/// Single scan tracking the minimal absolute distance; the first candidate
/// achieving the minimum wins ties, so callers should present candidates in
/// a fixed, meaningful order (typically ascending). Returns `None` only for
/// an empty slice.
pub fn nearest(candidates: &[f32], target: f32) -> Option<f32> {
    let mut best: Option<(f32, f32)> = None;
    for &y in candidates {
        let distance = (y - target).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((y, distance)),
        }
    }
    best.map(|(y, _)| y)
}
