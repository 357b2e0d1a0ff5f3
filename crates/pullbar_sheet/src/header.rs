//! Header bar decoration
//!
//! The grippable bar across the top of the sheet. Hosts can take the
//! default bar or supply their own view; either way the sheet notifies the
//! header whenever the logical position settles so it can restyle itself.

use crate::position::Position;
use pullbar_core::color::Color;
use std::sync::{Arc, Mutex};

/// Default header bar height in points.
pub const DEFAULT_HEADER_HEIGHT: f32 = 50.0;

/// Corner radius applied to the default header bar.
pub const DEFAULT_HEADER_CORNER_RADIUS: f32 = 5.0;

/// A header view the sheet can notify about position changes.
pub trait HeaderView: Send + Sync {
    /// Called after every settle with the new logical position.
    fn position_changed(&mut self, position: Position);
}

/// The built-in header bar: a white rounded grip strip.
#[derive(Clone, Copy, Debug)]
pub struct DefaultHeader {
    pub background: Color,
    pub height: f32,
    pub corner_radius: f32,
    last_position: Option<Position>,
}

impl Default for DefaultHeader {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            height: DEFAULT_HEADER_HEIGHT,
            corner_radius: DEFAULT_HEADER_CORNER_RADIUS,
            last_position: None,
        }
    }
}

impl DefaultHeader {
    pub fn new() -> Self {
        Self::default()
    }

    /// The position most recently announced by the sheet.
    pub fn last_position(&self) -> Option<Position> {
        self.last_position
    }
}

impl HeaderView for DefaultHeader {
    fn position_changed(&mut self, position: Position) {
        self.last_position = Some(position);
    }
}

/// How the sheet's header is rendered.
#[derive(Clone, Default)]
pub enum HeaderStyle {
    /// The built-in grip bar
    #[default]
    Default,
    /// A caller-supplied header view
    Custom(Arc<Mutex<dyn HeaderView>>),
}

impl HeaderStyle {
    /// Materialize the header view this style describes.
    pub(crate) fn instantiate(&self) -> Arc<Mutex<dyn HeaderView>> {
        match self {
            HeaderStyle::Default => Arc::new(Mutex::new(DefaultHeader::new())),
            HeaderStyle::Custom(view) => Arc::clone(view),
        }
    }
}
