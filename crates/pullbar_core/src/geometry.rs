//! Viewport geometry queries
//!
//! Geometry is an explicit dependency passed in at construction rather than
//! a process-global screen query, so snap-point resolution is a pure
//! function of the provider's current answer and tests run without a live
//! display.

/// A snapshot of the host viewport: total height plus safe-area insets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportGeometry {
    /// Full viewport height in points
    pub height: f32,
    /// Top safe-area inset (status bar, notch)
    pub safe_area_top: f32,
    /// Bottom safe-area inset (home indicator)
    pub safe_area_bottom: f32,
}

impl ViewportGeometry {
    pub const fn new(height: f32, safe_area_top: f32, safe_area_bottom: f32) -> Self {
        Self {
            height,
            safe_area_top,
            safe_area_bottom,
        }
    }
}

/// Source of the current viewport geometry.
///
/// Implemented by the host platform layer; queried fresh on every resolution
/// so rotation and trait changes are picked up without extra bookkeeping.
pub trait GeometryProvider: Send + Sync {
    /// Current viewport snapshot
    fn viewport(&self) -> ViewportGeometry;
}

/// A provider that always returns the same geometry.
///
/// Used by tests and headless hosts.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedGeometry {
    geometry: ViewportGeometry,
}

impl FixedGeometry {
    pub const fn new(geometry: ViewportGeometry) -> Self {
        Self { geometry }
    }
}

impl GeometryProvider for FixedGeometry {
    fn viewport(&self) -> ViewportGeometry {
        self.geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_geometry_round_trips() {
        let provider = FixedGeometry::new(ViewportGeometry::new(844.0, 44.0, 34.0));
        let viewport = provider.viewport();
        assert_eq!(viewport.height, 844.0);
        assert_eq!(viewport.safe_area_top, 44.0);
        assert_eq!(viewport.safe_area_bottom, 34.0);
    }
}
