//! Host collaborator traits
//!
//! The sheet composes with its host instead of subclassing toolkit types.
//! These traits are the whole surface it needs: a content view to forward
//! lifecycle to, a nested scroll view to observe, and a host surface to
//! size against. Containment, constraints, and visual-effect decoration
//! stay on the host's side of the seam.

/// The embedded content view.
///
/// Appear/disappear are forwarded by the sheet when it settles fully open
/// or fully closed, at most once per cycle.
pub trait ContentView: Send + Sync {
    fn on_appear(&mut self) {}
    fn on_disappear(&mut self) {}
}

/// A nested scrollable content view inside the sheet.
///
/// The sheet only reads offset and pan velocity and clamps the offset
/// during arbitration; it never manages the view's lifecycle.
pub trait ScrollContent: Send + Sync {
    fn content_offset_y(&self) -> f32;
    fn set_content_offset_y(&mut self, y: f32);
    fn pan_velocity_y(&self) -> f32;
}

/// The host surface the sheet is shown over.
pub trait SheetHost: Send + Sync {
    /// Current height of the host surface in points
    fn height(&self) -> f32;
}
