//! Pullbar Sheet
//!
//! A draggable, snap-positioned bottom sheet over a host surface:
//!
//! - **Snap Points**: min/max safe-area edges plus custom offsets, re-sorted
//!   on every write
//! - **Drag Gestures**: per-frame clamped tracking, velocity-based flicks,
//!   nearest-point settling with velocity-scaled durations
//! - **Scroll Arbitration**: a nested scroll view and the sheet drag share
//!   one gesture space without fighting
//! - **Position State Machine**: shrink/expand/custom with settle-time
//!   commit and idempotent appear/disappear forwarding
//!
//! The sheet composes with its host through narrow traits ([`ContentView`],
//! [`ScrollContent`], [`SheetHost`], [`HeaderView`]) instead of subclassing
//! toolkit types; geometry comes from an injected
//! [`pullbar_core::geometry::GeometryProvider`].

pub mod arbitration;
pub mod drag;
pub mod header;
pub mod host;
pub mod position;
pub mod sheet;
pub mod snap;

pub use arbitration::ScrollLinkage;
pub use drag::{DragState, ReleaseAction, FLICK_THRESHOLD, MIN_SETTLE_DURATION};
pub use header::{DefaultHeader, HeaderStyle, HeaderView};
pub use host::{ContentView, ScrollContent, SheetHost};
pub use position::Position;
pub use sheet::{
    Sheet, SheetBuilder, SheetStyle, SettleCompletion, DEFAULT_TRANSITION_DURATION,
};
pub use snap::{nearest, SnapGrid, SnapPoint, EDGE_MARGIN};

/// Convenience re-exports for hosts embedding the sheet.
pub mod prelude {
    pub use crate::header::{HeaderStyle, HeaderView};
    pub use crate::host::{ContentView, ScrollContent, SheetHost};
    pub use crate::position::Position;
    pub use crate::sheet::{Sheet, SheetBuilder, SheetStyle};
    pub use crate::snap::{SnapGrid, SnapPoint};
    pub use pullbar_core::geometry::{FixedGeometry, GeometryProvider, ViewportGeometry};
    pub use pullbar_core::gesture::{DragEvent, DragPhase, NestedScrollEvent};
}
