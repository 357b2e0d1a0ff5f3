//! Logical sheet position
//!
//! Exactly one position is current at any time. Transitions happen only
//! through the expand/shrink/drag-release paths in [`crate::sheet::Sheet`];
//! nothing else writes it.

use crate::snap::SnapGrid;
use pullbar_core::geometry::ViewportGeometry;

/// Logical state of the sheet.
#[derive(Clone, Copy, Debug, Default)]
pub enum Position {
    /// Resting at the bottom of the pullable range
    #[default]
    Shrink,
    /// Resting at the top of the pullable range
    Expand,
    /// Resting at an intermediate snap coordinate
    Custom(f32),
}

impl Position {
    pub fn is_expand(&self) -> bool {
        matches!(self, Position::Expand)
    }

    pub fn is_shrink(&self) -> bool {
        matches!(self, Position::Shrink)
    }

    /// The y-coordinate this position rests at for the given snap grid.
    pub fn resolve(&self, grid: &SnapGrid, geometry: &ViewportGeometry) -> f32 {
        match self {
            Position::Expand => grid.pullable_min_y(geometry),
            Position::Shrink => grid.pullable_max_y(geometry),
            Position::Custom(y) => *y,
        }
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Position::Shrink, Position::Shrink) => true,
            (Position::Expand, Position::Expand) => true,
            (Position::Custom(a), Position::Custom(b)) => a == b,
            _ => false,
        }
    }
}
