//! Integration tests for gesture-to-position resolution
//!
//! Drives the sheet the way a host would: gesture frames in, frame-pump
//! ticks until settle, then asserts on the logical position and lifecycle
//! forwarding. Geometry is the reference phone viewport (height 844, top
//! inset 44, bottom inset 34), which resolves `Min`/`Max` to 44/760.

use std::sync::{Arc, Mutex};

use pullbar_core::geometry::{FixedGeometry, GeometryProvider, ViewportGeometry};
use pullbar_core::gesture::DragEvent;
use pullbar_sheet::{ContentView, Position, ScrollContent, Sheet, SnapPoint};

const VIEWPORT: ViewportGeometry = ViewportGeometry::new(844.0, 44.0, 34.0);

fn geometry() -> Arc<dyn GeometryProvider> {
    Arc::new(FixedGeometry::new(VIEWPORT))
}

fn settle(sheet: &mut Sheet) {
    // Frame-pump at 60fps until the active animation finishes
    for _ in 0..240 {
        if !sheet.tick(1.0 / 60.0) {
            break;
        }
    }
}

#[derive(Default)]
struct CountingContent {
    appears: u32,
    disappears: u32,
}

impl ContentView for CountingContent {
    fn on_appear(&mut self) {
        self.appears += 1;
    }

    fn on_disappear(&mut self) {
        self.disappears += 1;
    }
}

struct StubScrollContent {
    offset_y: f32,
    velocity_y: f32,
}

impl ScrollContent for StubScrollContent {
    fn content_offset_y(&self) -> f32 {
        self.offset_y
    }

    fn set_content_offset_y(&mut self, y: f32) {
        self.offset_y = y;
    }

    fn pan_velocity_y(&self) -> f32 {
        self.velocity_y
    }
}

/// Concrete handle for mutating the stub, dyn handle for the sheet.
fn scroll_stub(
    offset_y: f32,
    velocity_y: f32,
) -> (Arc<Mutex<StubScrollContent>>, Arc<Mutex<dyn ScrollContent>>) {
    let concrete = Arc::new(Mutex::new(StubScrollContent {
        offset_y,
        velocity_y,
    }));
    let dynamic: Arc<Mutex<dyn ScrollContent>> = concrete.clone();
    (concrete, dynamic)
}

fn drag_release(sheet: &mut Sheet, to_y: f32, velocity_y: f32) {
    let start = sheet.offset_y();
    sheet.handle_drag(DragEvent::began());
    sheet.handle_drag(DragEvent::changed(to_y - start));
    sheet.handle_drag(DragEvent::ended(to_y - start, velocity_y));
}

#[test]
fn pullable_range_is_ordered_for_arbitrary_sets() {
    let sets: [&[SnapPoint]; 5] = [
        &[SnapPoint::Min, SnapPoint::Max],
        &[SnapPoint::Max, SnapPoint::Min],
        &[SnapPoint::Custom(600.0), SnapPoint::Custom(100.0)],
        &[SnapPoint::Custom(400.0), SnapPoint::Min, SnapPoint::Max],
        &[],
    ];
    for set in sets {
        let sheet = Sheet::builder(geometry())
            .snap_points(set.iter().copied())
            .build();
        let grid = sheet.snap_points();
        assert!(grid.pullable_min_y(&VIEWPORT) <= grid.pullable_max_y(&VIEWPORT));
    }
}

#[test]
fn release_below_threshold_settles_on_the_nearest_edge() {
    // Snap points {Min, Max} resolve to {44, 760}; release at y=700 with
    // velocity 200 is no flick, nearest(700) = 760, the sheet closes.
    let mut sheet = Sheet::builder(geometry())
        .initial_position(Position::Expand)
        .build();

    drag_release(&mut sheet, 700.0, 200.0);
    settle(&mut sheet);

    assert_eq!(sheet.position(), Position::Shrink);
    assert_eq!(sheet.offset_y(), 760.0);
}

#[test]
fn fast_upward_release_expands_regardless_of_offset() {
    // Velocity -2000 beats the 1500 threshold; position decides, not offset
    let mut sheet = Sheet::builder(geometry()).build();

    drag_release(&mut sheet, 750.0, -2000.0);
    settle(&mut sheet);

    assert_eq!(sheet.position(), Position::Expand);
    assert_eq!(sheet.offset_y(), 44.0);
}

#[test]
fn fast_downward_release_shrinks_from_any_offset() {
    let mut sheet = Sheet::builder(geometry())
        .initial_position(Position::Expand)
        .build();

    for offset in [50.0, 300.0, 700.0] {
        // Reset to expanded before each flick
        sheet.expand();
        settle(&mut sheet);

        drag_release(&mut sheet, offset, 2000.0);
        settle(&mut sheet);
        assert_eq!(sheet.position(), Position::Shrink);
    }
}

#[test]
fn mid_grid_release_becomes_a_custom_position_without_lifecycle_hooks() {
    // Three snap points {44, 400, 760}; release at 390 settles on 400
    let content = Arc::new(Mutex::new(CountingContent::default()));
    let dyn_content: Arc<Mutex<dyn ContentView>> = content.clone();

    let mut sheet = Sheet::builder(geometry())
        .content(dyn_content)
        .snap_points([SnapPoint::Min, SnapPoint::Custom(400.0), SnapPoint::Max])
        .build();

    drag_release(&mut sheet, 390.0, 200.0);
    settle(&mut sheet);

    assert_eq!(sheet.position(), Position::Custom(400.0));
    assert_eq!(sheet.offset_y(), 400.0);
    assert_eq!(content.lock().unwrap().appears, 0);
    assert_eq!(content.lock().unwrap().disappears, 0);
}

#[test]
fn every_drag_frame_stays_inside_the_pullable_range() {
    let mut sheet = Sheet::builder(geometry()).build();

    sheet.handle_drag(DragEvent::began());
    for translation in [-2000.0, -800.0, -100.0, 0.0, 55.5, 900.0, 4000.0] {
        sheet.handle_drag(DragEvent::changed(translation));
        assert!(
            sheet.offset_y() >= 44.0 && sheet.offset_y() <= 760.0,
            "offset {} escaped the pullable range",
            sheet.offset_y()
        );
    }
}

#[test]
fn appear_hooks_fire_exactly_once_until_a_shrink() {
    let content = Arc::new(Mutex::new(CountingContent::default()));
    let dyn_content: Arc<Mutex<dyn ContentView>> = content.clone();

    let mut sheet = Sheet::builder(geometry()).content(dyn_content).build();

    sheet.expand();
    settle(&mut sheet);
    sheet.expand();
    settle(&mut sheet);
    assert_eq!(content.lock().unwrap().appears, 1);

    sheet.shrink();
    settle(&mut sheet);
    assert_eq!(content.lock().unwrap().disappears, 1);

    // The paired shrink re-arms the appear hooks
    sheet.expand();
    settle(&mut sheet);
    assert_eq!(content.lock().unwrap().appears, 2);
}

#[test]
fn expanded_and_shrunk_callbacks_fire_on_settle() {
    let expanded = Arc::new(Mutex::new(0u32));
    let shrunk = Arc::new(Mutex::new(0u32));

    let expanded_counter = Arc::clone(&expanded);
    let shrunk_counter = Arc::clone(&shrunk);
    let mut sheet = Sheet::builder(geometry())
        .on_expanded(move || *expanded_counter.lock().unwrap() += 1)
        .on_shrunk(move || *shrunk_counter.lock().unwrap() += 1)
        .build();

    sheet.expand();
    assert_eq!(*expanded.lock().unwrap(), 0); // not before settle
    settle(&mut sheet);
    assert_eq!(*expanded.lock().unwrap(), 1);

    sheet.shrink();
    settle(&mut sheet);
    assert_eq!(*shrunk.lock().unwrap(), 1);
}

#[test]
fn content_with_offset_and_upward_velocity_owns_the_gesture() {
    let (concrete, dynamic) = scroll_stub(150.0, 400.0);

    let mut sheet = Sheet::builder(geometry())
        .initial_position(Position::Expand)
        .build();
    sheet.scroll_view_did_scroll(&dynamic);

    // Content still has offset to consume: sheet frames are ignored
    let before = sheet.offset_y();
    sheet.handle_drag(DragEvent::began());
    sheet.handle_drag(DragEvent::changed(200.0));
    assert_eq!(sheet.offset_y(), before);

    // Once the content reaches its own top, the sheet takes over
    concrete.lock().unwrap().offset_y = 0.0;
    sheet.handle_drag(DragEvent::changed(200.0));
    assert_eq!(sheet.offset_y(), 244.0); // 44 + 200
}

#[test]
fn content_scrolling_away_from_its_top_leaves_the_sheet_free() {
    let (_concrete, dynamic) = scroll_stub(150.0, -400.0);

    let mut sheet = Sheet::builder(geometry())
        .initial_position(Position::Expand)
        .build();
    sheet.scroll_view_did_scroll(&dynamic);

    sheet.handle_drag(DragEvent::began());
    sheet.handle_drag(DragEvent::changed(120.0));
    assert_eq!(sheet.offset_y(), 164.0); // 44 + 120
}

#[test]
fn content_cannot_scroll_until_the_sheet_is_fully_open() {
    let (concrete, dynamic) = scroll_stub(60.0, 0.0);

    // Sheet resting closed: any content offset is pinned back to zero
    let mut sheet = Sheet::builder(geometry()).build();
    sheet.scroll_view_did_scroll(&dynamic);
    assert_eq!(concrete.lock().unwrap().offset_y, 0.0);

    // Overscroll past the top is clamped even when fully open
    sheet.expand();
    settle(&mut sheet);
    concrete.lock().unwrap().offset_y = -25.0;
    sheet.scroll_view_did_scroll(&dynamic);
    assert_eq!(concrete.lock().unwrap().offset_y, 0.0);

    // Fully open: ordinary scrolling passes through untouched
    concrete.lock().unwrap().offset_y = 90.0;
    sheet.scroll_view_did_scroll(&dynamic);
    assert_eq!(concrete.lock().unwrap().offset_y, 90.0);
}

#[test]
fn dropped_scroll_content_never_blocks_the_sheet() {
    let (concrete, dynamic) = scroll_stub(150.0, 400.0);

    let mut sheet = Sheet::builder(geometry())
        .initial_position(Position::Expand)
        .build();
    sheet.scroll_view_did_scroll(&dynamic);

    drop(dynamic);
    drop(concrete);

    // The weak linkage upgrades to nothing; the sheet owns the gesture
    sheet.handle_drag(DragEvent::began());
    sheet.handle_drag(DragEvent::changed(120.0));
    assert_eq!(sheet.offset_y(), 164.0);
}

#[test]
fn empty_snap_set_still_resolves_releases() {
    let mut sheet = Sheet::builder(geometry()).snap_points([]).build();

    drag_release(&mut sheet, 100.0, 0.0);
    settle(&mut sheet);

    // Fallback pair {44, 760}: 100 is nearer the open edge
    assert_eq!(sheet.position(), Position::Expand);
}

#[test]
fn header_tap_toggles_between_the_edges() {
    let mut sheet = Sheet::builder(geometry()).build();

    sheet.handle_header_tap();
    settle(&mut sheet);
    assert_eq!(sheet.position(), Position::Expand);

    sheet.handle_header_tap();
    settle(&mut sheet);
    assert_eq!(sheet.position(), Position::Shrink);
}
