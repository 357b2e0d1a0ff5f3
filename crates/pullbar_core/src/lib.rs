//! Pullbar Core
//!
//! This crate provides the foundational primitives for the pullbar
//! bottom-sheet component:
//!
//! - **Viewport Geometry**: injectable screen/safe-area queries
//! - **Gesture Events**: drag, tap, and nested-scroll observations
//! - **Colors**: plain RGBA values for sheet styling
//! - **Errors**: the shared error type for internal plumbing
//!
//! # Example
//!
//! ```rust
//! use pullbar_core::geometry::{FixedGeometry, GeometryProvider, ViewportGeometry};
//!
//! let provider = FixedGeometry::new(ViewportGeometry::new(844.0, 44.0, 34.0));
//! assert_eq!(provider.viewport().height, 844.0);
//! ```

pub mod color;
pub mod error;
pub mod geometry;
pub mod gesture;

pub use color::Color;
pub use error::{Result, SheetError};
pub use geometry::{FixedGeometry, GeometryProvider, ViewportGeometry};
pub use gesture::{DragEvent, DragPhase, NestedScrollEvent};
