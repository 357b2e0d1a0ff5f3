//! The pullable bottom sheet
//!
//! One sheet over one host surface. Gesture frames come in through
//! [`Sheet::handle_drag`], scroll notifications through
//! [`Sheet::scroll_view_did_scroll`], and the host's frame pump drives
//! animation through [`Sheet::tick`]. Logical position commits on settle,
//! never when a transition starts, so an interrupted move cannot
//! half-commit.
//!
//! # Example
//!
//! ```rust,ignore
//! use pullbar_sheet::prelude::*;
//!
//! let mut sheet = Sheet::builder(geometry)
//!     .content(content)
//!     .snap_points([SnapPoint::Min, SnapPoint::Custom(400.0), SnapPoint::Max])
//!     .on_expanded(|| println!("open"))
//!     .build();
//!
//! sheet.show(host, None);
//! sheet.expand();
//! // each frame:
//! sheet.tick(dt);
//! ```

use std::sync::{Arc, Mutex};

use pullbar_animation::{AnimationScheduler, Easing, Tween, TweenId};
use pullbar_core::color::Color;
use pullbar_core::error::{Result, SheetError};
use pullbar_core::geometry::{GeometryProvider, ViewportGeometry};
use pullbar_core::gesture::{DragEvent, DragPhase, NestedScrollEvent};
use smallvec::{smallvec, SmallVec};

use crate::arbitration::ScrollLinkage;
use crate::drag::{resolve_release, DragState, ReleaseAction};
use crate::header::{HeaderStyle, HeaderView};
use crate::host::{ContentView, ScrollContent, SheetHost};
use crate::position::Position;
use crate::snap::{nearest, SnapGrid, SnapPoint};

/// Default duration for expand/shrink transitions, in seconds.
pub const DEFAULT_TRANSITION_DURATION: f32 = 0.75;

// ============================================================================
// Style & callback types
// ============================================================================

/// Visual configuration the host's decoration layer reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetStyle {
    pub background: Color,
    pub rounded_corners: bool,
    pub corner_radius: f32,
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            background: Color::TRANSPARENT,
            rounded_corners: true,
            corner_radius: 5.0,
        }
    }
}

/// Continuation invoked exactly once when an animated move finishes.
///
/// `finished` is `false` when the move was superseded before settling.
pub type SettleCompletion = Box<dyn FnOnce(bool) + Send>;

/// Hook fired after the sheet settles fully open or fully closed.
pub type SheetCallback = Arc<dyn Fn() + Send + Sync>;

/// Hook fired when a transition starts, with the target position.
pub type TransitionHook = Arc<dyn Fn(Position) + Send + Sync>;

// ============================================================================
// Transition bookkeeping
// ============================================================================

/// State committed when the active animation settles.
#[derive(Clone, Copy, Debug)]
enum SettleAction {
    Expand,
    Shrink,
    Custom(f32),
    /// Raw `scroll_to` move; no position commit
    Move,
}

struct ActiveTransition {
    tween: TweenId,
    action: SettleAction,
    completion: Option<SettleCompletion>,
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`Sheet`].
pub struct SheetBuilder {
    geometry: Arc<dyn GeometryProvider>,
    content: Option<Arc<Mutex<dyn ContentView>>>,
    header: HeaderStyle,
    initial_position: Position,
    snap_points: SnapGrid,
    style: SheetStyle,
    on_expanded: Option<SheetCallback>,
    on_shrunk: Option<SheetCallback>,
    on_transition_start: Option<TransitionHook>,
}

impl SheetBuilder {
    pub fn new(geometry: Arc<dyn GeometryProvider>) -> Self {
        Self {
            geometry,
            content: None,
            header: HeaderStyle::Default,
            initial_position: Position::Shrink,
            snap_points: SnapGrid::default(),
            style: SheetStyle::default(),
            on_expanded: None,
            on_shrunk: None,
            on_transition_start: None,
        }
    }

    /// Content view embedded below the header.
    pub fn content(mut self, content: Arc<Mutex<dyn ContentView>>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn header(mut self, style: HeaderStyle) -> Self {
        self.header = style;
        self
    }

    pub fn initial_position(mut self, position: Position) -> Self {
        self.initial_position = position;
        self
    }

    pub fn snap_points(mut self, points: impl IntoIterator<Item = SnapPoint>) -> Self {
        self.snap_points.set(points);
        self
    }

    pub fn style(mut self, style: SheetStyle) -> Self {
        self.style = style;
        self
    }

    pub fn on_expanded(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_expanded = Some(Arc::new(callback));
        self
    }

    pub fn on_shrunk(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_shrunk = Some(Arc::new(callback));
        self
    }

    pub fn on_transition_start(
        mut self,
        callback: impl Fn(Position) + Send + Sync + 'static,
    ) -> Self {
        self.on_transition_start = Some(Arc::new(callback));
        self
    }

    pub fn build(self) -> Sheet {
        let viewport = self.geometry.viewport();
        let offset_y = self.initial_position.resolve(&self.snap_points, &viewport);
        Sheet {
            snap_points: self.snap_points,
            position: self.initial_position,
            offset_y,
            style: self.style,
            geometry: self.geometry,
            scheduler: Arc::new(Mutex::new(AnimationScheduler::new())),
            content: self.content,
            header: self.header.instantiate(),
            scroll_linkage: ScrollLinkage::new(),
            host: None,
            height: None,
            drag: None,
            transition: None,
            content_appeared: false,
            on_expanded: self.on_expanded,
            on_shrunk: self.on_shrunk,
            on_transition_start: self.on_transition_start,
        }
    }
}

// ============================================================================
// Sheet
// ============================================================================

/// A draggable, snap-positioned bottom sheet over a host surface.
pub struct Sheet {
    snap_points: SnapGrid,
    position: Position,
    /// Live vertical offset, clamped to the pullable range
    offset_y: f32,
    style: SheetStyle,
    geometry: Arc<dyn GeometryProvider>,
    scheduler: Arc<Mutex<AnimationScheduler>>,
    content: Option<Arc<Mutex<dyn ContentView>>>,
    header: Arc<Mutex<dyn HeaderView>>,
    scroll_linkage: ScrollLinkage,
    host: Option<Arc<Mutex<dyn SheetHost>>>,
    /// Sheet height from the last layout pass; `None` until attached
    height: Option<f32>,
    drag: Option<DragState>,
    transition: Option<ActiveTransition>,
    /// Appear hooks fired and not yet paired with a shrink
    content_appeared: bool,
    on_expanded: Option<SheetCallback>,
    on_shrunk: Option<SheetCallback>,
    on_transition_start: Option<TransitionHook>,
}

impl Sheet {
    pub fn builder(geometry: Arc<dyn GeometryProvider>) -> SheetBuilder {
        SheetBuilder::new(geometry)
    }

    // ------------------------------------------------------------------
    // Accessors & config
    // ------------------------------------------------------------------

    /// Current logical position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Live vertical offset.
    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    pub fn snap_points(&self) -> &SnapGrid {
        &self.snap_points
    }

    pub fn style(&self) -> &SheetStyle {
        &self.style
    }

    /// Sheet height from the last layout pass; `None` until shown.
    pub fn height(&self) -> Option<f32> {
        self.height
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Whether the sheet rests at the top of its pullable range.
    pub fn is_fully_expanded(&self) -> bool {
        self.offset_y <= self.pullable_min_y()
    }

    /// The header view the sheet notifies on settle.
    pub fn header_view(&self) -> Arc<Mutex<dyn HeaderView>> {
        Arc::clone(&self.header)
    }

    /// Replace the snap-point set; re-sorted on write, live offset re-clamped.
    pub fn set_snap_points(&mut self, points: impl IntoIterator<Item = SnapPoint>) {
        self.snap_points.set(points);
        if self.snap_points.is_empty() {
            tracing::debug!("snap-point set emptied; range falls back to min/max");
        }
        let viewport = self.geometry.viewport();
        self.offset_y = self.offset_y.clamp(
            self.snap_points.pullable_min_y(&viewport),
            self.snap_points.pullable_max_y(&viewport),
        );
    }

    pub fn set_background(&mut self, color: Color) {
        self.style.background = color;
    }

    pub fn set_rounded_corners(&mut self, rounded: bool) {
        self.style.rounded_corners = rounded;
    }

    // ------------------------------------------------------------------
    // Attachment
    // ------------------------------------------------------------------

    /// Attach the sheet over a host surface.
    ///
    /// `surface` overrides the surface the sheet sizes against; by default
    /// it is the host itself. A missing content view skips container setup
    /// but never fails.
    pub fn show(
        &mut self,
        host: Arc<Mutex<dyn SheetHost>>,
        surface: Option<Arc<Mutex<dyn SheetHost>>>,
    ) {
        self.host = Some(surface.unwrap_or(host));
        if self.content.is_none() {
            tracing::debug!("sheet shown without a content view; container setup skipped");
        }

        let viewport = self.geometry.viewport();
        self.offset_y = self.position.resolve(&self.snap_points, &viewport);
        self.layout_if_attached();

        // A sheet shown already expanded has visible content.
        if self.position.is_expand() {
            self.fire_appear_hooks();
        }
        self.notify_header();
    }

    /// Recompute the sheet height against the host surface; detached sheets
    /// skip the pass.
    pub fn layout_if_attached(&mut self) {
        match self.sheet_height() {
            Ok(height) => self.height = Some(height),
            Err(err) => tracing::trace!(%err, "layout skipped"),
        }
    }

    fn sheet_height(&self) -> Result<f32> {
        let host = self.host.as_ref().ok_or(SheetError::NotAttached)?;
        let host_height = host.lock().unwrap().height();
        Ok(host_height - self.pullable_min_y())
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Animate to the fully-open position.
    ///
    /// Re-runnable: calling while already expanded re-runs the animation
    /// without double-firing appear hooks.
    pub fn expand(&mut self) {
        self.begin_transition(Position::Expand);
        let target = self.pullable_min_y();
        self.animate_to(
            target,
            DEFAULT_TRANSITION_DURATION,
            SettleAction::Expand,
            None,
        );
    }

    /// Animate to the fully-closed position.
    pub fn shrink(&mut self) {
        self.begin_transition(Position::Shrink);
        let target = self.pullable_max_y();
        self.animate_to(
            target,
            DEFAULT_TRANSITION_DURATION,
            SettleAction::Shrink,
            None,
        );
    }

    /// Raw animated move with an explicit completion continuation.
    ///
    /// Does not change the logical position. A new call supersedes any
    /// in-flight move; the superseded completion fires with `false`.
    pub fn scroll_to(&mut self, y: f32, duration: f32, completion: Option<SettleCompletion>) {
        self.animate_to(y, duration, SettleAction::Move, completion);
    }

    /// Rotation/trait-change recomputation hook: re-clamps the live offset
    /// and re-settles onto the current logical position's coordinate.
    pub fn handle_geometry_changed(&mut self) {
        let viewport = self.geometry.viewport();
        let min_y = self.snap_points.pullable_min_y(&viewport);
        let max_y = self.snap_points.pullable_max_y(&viewport);
        self.offset_y = self.offset_y.clamp(min_y, max_y);
        self.layout_if_attached();

        let target = self.position.resolve(&self.snap_points, &viewport);
        self.scroll_to(target, DEFAULT_TRANSITION_DURATION, None);
    }

    fn begin_transition(&mut self, target: Position) {
        tracing::debug!(?target, "sheet transition starting");
        if let Some(hook) = &self.on_transition_start {
            hook(target);
        }
    }

    fn animate_to(
        &mut self,
        target: f32,
        duration: f32,
        action: SettleAction,
        completion: Option<SettleCompletion>,
    ) {
        self.cancel_active_transition();
        let tween = Tween::new(self.offset_y, target, duration, Easing::EaseOut);
        let id = self.scheduler.lock().unwrap().add_tween(tween);
        self.transition = Some(ActiveTransition {
            tween: id,
            action,
            completion,
        });
    }

    /// Last write wins: remove the in-flight tween and fire its completion
    /// with `finished = false`. State is never committed here.
    fn cancel_active_transition(&mut self) {
        if let Some(prev) = self.transition.take() {
            self.scheduler.lock().unwrap().remove_tween(prev.tween);
            if let Some(completion) = prev.completion {
                completion(false);
            }
        }
    }

    // ------------------------------------------------------------------
    // Frame pump
    // ------------------------------------------------------------------

    /// Advance the active animation by `dt` seconds and apply the value to
    /// the live offset. Settle work (position commit, lifecycle hooks,
    /// callbacks, completion) runs here, exactly once per animation.
    ///
    /// Returns whether an animation is still running.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(tween_id) = self.transition.as_ref().map(|t| t.tween) else {
            return false;
        };

        let finished;
        {
            let mut scheduler = self.scheduler.lock().unwrap();
            scheduler.tick(dt);
            match scheduler.get_tween(tween_id) {
                Some(tween) => {
                    self.offset_y = tween.value();
                    finished = tween.is_finished();
                }
                None => {
                    drop(scheduler);
                    self.transition = None;
                    return false;
                }
            }
            if finished {
                scheduler.remove_tween(tween_id);
            }
        }

        if finished {
            if let Some(transition) = self.transition.take() {
                self.finish_transition(transition);
            }
            return false;
        }
        true
    }

    fn finish_transition(&mut self, transition: ActiveTransition) {
        match transition.action {
            SettleAction::Expand => {
                self.position = Position::Expand;
                self.fire_appear_hooks();
                self.notify_header();
                if let Some(callback) = &self.on_expanded {
                    callback();
                }
            }
            SettleAction::Shrink => {
                self.position = Position::Shrink;
                self.fire_disappear_hooks();
                self.notify_header();
                if let Some(callback) = &self.on_shrunk {
                    callback();
                }
            }
            SettleAction::Custom(y) => {
                self.position = Position::Custom(y);
                self.notify_header();
            }
            SettleAction::Move => {}
        }
        tracing::debug!(position = ?self.position, offset_y = self.offset_y, "sheet settled");

        if let Some(completion) = transition.completion {
            completion(true);
        }
    }

    /// Appear hooks fire at most once per expand cycle; the guard resets on
    /// the paired shrink.
    fn fire_appear_hooks(&mut self) {
        if self.content_appeared {
            return;
        }
        self.content_appeared = true;
        match self.require_content() {
            Ok(content) => content.lock().unwrap().on_appear(),
            Err(err) => tracing::trace!(%err, "appear hooks skipped"),
        }
    }

    fn fire_disappear_hooks(&mut self) {
        if !self.content_appeared {
            return;
        }
        self.content_appeared = false;
        match self.require_content() {
            Ok(content) => content.lock().unwrap().on_disappear(),
            Err(err) => tracing::trace!(%err, "disappear hooks skipped"),
        }
    }

    fn require_content(&self) -> Result<&Arc<Mutex<dyn ContentView>>> {
        self.content.as_ref().ok_or(SheetError::NoContent)
    }

    fn notify_header(&self) {
        self.header.lock().unwrap().position_changed(self.position);
    }

    // ------------------------------------------------------------------
    // Gestures
    // ------------------------------------------------------------------

    /// Feed one drag gesture frame.
    pub fn handle_drag(&mut self, event: DragEvent) {
        match event.phase {
            DragPhase::Began => {
                // The finger takes over from any in-flight animation.
                self.cancel_active_transition();
                self.drag = Some(DragState::new(self.offset_y));
            }
            DragPhase::Changed => {
                if self.scroll_linkage.content_owns_gesture() {
                    return;
                }
                let Some(drag) = self.drag else {
                    tracing::trace!("drag update without an active drag; ignoring");
                    return;
                };
                let (min_y, max_y) = self.pullable_range();
                self.offset_y = (drag.start_y() + event.translation_y).clamp(min_y, max_y);
            }
            DragPhase::Ended => {
                if self.scroll_linkage.content_owns_gesture() {
                    self.drag = None;
                    return;
                }
                let Some(drag) = self.drag.take() else {
                    tracing::trace!("drag release without an active drag; ignoring");
                    return;
                };
                let viewport = self.geometry.viewport();
                let (min_y, max_y) = self.pullable_range();
                self.offset_y = (drag.start_y() + event.translation_y).clamp(min_y, max_y);

                let candidates = self.release_candidates(&viewport);
                let action = resolve_release(
                    self.offset_y,
                    event.velocity_y,
                    self.position,
                    &candidates,
                    min_y,
                    max_y,
                    viewport.height,
                );
                match action {
                    ReleaseAction::Expand => self.expand(),
                    ReleaseAction::Shrink => self.shrink(),
                    ReleaseAction::SettleTo { target, duration } => {
                        self.begin_transition(Position::Custom(target));
                        self.animate_to(target, duration, SettleAction::Custom(target), None);
                    }
                }
            }
        }
    }

    /// Tap on the header bar toggles between shrink and expand. From a
    /// custom resting position the nearer edge reads as the current state,
    /// so the toggle moves to the other one.
    pub fn handle_header_tap(&mut self) {
        match self.position {
            Position::Shrink => self.expand(),
            Position::Expand => self.shrink(),
            Position::Custom(y) => {
                let (min_y, max_y) = self.pullable_range();
                match nearest(&[min_y, max_y], y) {
                    Some(target) if target == min_y => self.shrink(),
                    Some(_) => self.expand(),
                    None => {}
                }
            }
        }
    }

    /// Forwarding hook for nested-scroll notifications: records the linkage
    /// and applies the arbitration clamps.
    pub fn scroll_view_did_scroll(&mut self, content: &Arc<Mutex<dyn ScrollContent>>) {
        self.scroll_linkage.link(content);
        let event = {
            let content = content.lock().unwrap();
            NestedScrollEvent {
                offset_y: content.content_offset_y(),
                velocity_y: content.pan_velocity_y(),
            }
        };
        self.on_nested_scroll(event);
    }

    /// Arbitration entry point: records the observation and pins the
    /// content's offset while the sheet is in the way.
    pub fn on_nested_scroll(&mut self, event: NestedScrollEvent) {
        self.scroll_linkage.observe(event);
        let fully_expanded = self.is_fully_expanded();
        self.scroll_linkage.enforce_top_pin(fully_expanded);
    }

    // ------------------------------------------------------------------
    // Range helpers
    // ------------------------------------------------------------------

    fn pullable_min_y(&self) -> f32 {
        self.snap_points.pullable_min_y(&self.geometry.viewport())
    }

    fn pullable_max_y(&self) -> f32 {
        self.snap_points.pullable_max_y(&self.geometry.viewport())
    }

    fn pullable_range(&self) -> (f32, f32) {
        let viewport = self.geometry.viewport();
        (
            self.snap_points.pullable_min_y(&viewport),
            self.snap_points.pullable_max_y(&viewport),
        )
    }

    fn release_candidates(&self, viewport: &ViewportGeometry) -> SmallVec<[f32; 4]> {
        match self.try_release_candidates(viewport) {
            Ok(candidates) => candidates,
            Err(err) => {
                tracing::trace!(%err, "release falls back to the edge pair");
                smallvec![
                    self.snap_points.pullable_min_y(viewport),
                    self.snap_points.pullable_max_y(viewport),
                ]
            }
        }
    }

    fn try_release_candidates(&self, viewport: &ViewportGeometry) -> Result<SmallVec<[f32; 4]>> {
        if self.snap_points.is_empty() {
            return Err(SheetError::EmptySnapPoints);
        }
        Ok(self.snap_points.resolved(viewport))
    }
}
