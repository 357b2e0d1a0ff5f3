//! Scroll arbitration
//!
//! The sheet drag and the nested content's scroll share one gesture space.
//! Two rules keep them from fighting:
//!
//! 1. While the content is scrolling back toward its own top
//!    (`velocity_y > 0` with `offset_y > 0`), the content owns the gesture
//!    and the sheet must not move.
//! 2. Until the sheet is fully expanded, the content may not scroll at all;
//!    its offset is pinned to zero.
//!
//! The linkage is observation-only: a weak handle refreshed on every scroll
//! notification, checked before every read so a content view dropped by the
//! host never dangles.

use crate::host::ScrollContent;
use pullbar_core::gesture::NestedScrollEvent;
use std::sync::{Arc, Mutex, Weak};

/// Weak, non-owning link to the most recently observed scroll content.
#[derive(Default)]
pub struct ScrollLinkage {
    content: Option<Weak<Mutex<dyn ScrollContent>>>,
    last_observation: Option<NestedScrollEvent>,
}

impl ScrollLinkage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `content` as the currently observed scroll view.
    pub fn link(&mut self, content: &Arc<Mutex<dyn ScrollContent>>) {
        self.content = Some(Arc::downgrade(content));
    }

    /// Forget the observed scroll view.
    pub fn unlink(&mut self) {
        self.content = None;
        self.last_observation = None;
    }

    /// Record the offset/velocity pair seen at notification time.
    pub fn observe(&mut self, event: NestedScrollEvent) {
        self.last_observation = Some(event);
    }

    /// The offset/velocity pair from the latest scroll notification.
    pub fn last_observation(&self) -> Option<NestedScrollEvent> {
        self.last_observation
    }

    pub fn is_linked(&self) -> bool {
        self.upgrade().is_some()
    }

    fn upgrade(&self) -> Option<Arc<Mutex<dyn ScrollContent>>> {
        self.content.as_ref().and_then(Weak::upgrade)
    }

    /// Rule 1: does the nested content currently own the gesture?
    ///
    /// True while the content is being dragged back toward its own top and
    /// has offset left to consume. A dropped or never-linked content view
    /// leaves the gesture with the sheet.
    pub fn content_owns_gesture(&self) -> bool {
        let Some(content) = self.upgrade() else {
            return false;
        };
        let content = content.lock().unwrap();
        content.pan_velocity_y() > 0.0 && content.content_offset_y() > 0.0
    }

    /// Rule 2: pin the content's offset while the sheet is in the way.
    ///
    /// Negative offsets (overscroll past the top) are always clamped to
    /// zero; any positive offset is clamped back to zero until the sheet is
    /// fully expanded.
    pub fn enforce_top_pin(&self, sheet_fully_expanded: bool) {
        let Some(content) = self.upgrade() else {
            return;
        };
        let mut content = content.lock().unwrap();
        let offset = content.content_offset_y();
        if offset < 0.0 || (!sheet_fully_expanded && offset > 0.0) {
            content.set_content_offset_y(0.0);
        }
    }
}
