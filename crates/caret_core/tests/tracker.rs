mod common;

use caret_core::{CaretStyle, FirstPosition, ListenSet, Tracker, TrackerConfig, VisualUpdate};
use common::*;
use core_types::{CaretEvent, EventKind, Point, Rect};

const WINDOW: u64 = 1;

fn build(layout: Layout, config: TrackerConfig) -> (Tracker, FakeDocument, RecordingHost) {
    let doc = FakeDocument::new(layout);
    let mut host = RecordingHost::default();
    let tracker = Tracker::new(WINDOW, Box::new(doc.clone()), &mut host, config).unwrap();
    (tracker, doc, host)
}

fn keydown() -> CaretEvent {
    CaretEvent::new(EventKind::KeyDown, EDITOR)
}

#[test]
fn construction_mounts_once_and_subscribes() {
    let (tracker, _doc, host) = build(Layout::editor_with_caret(40.0, 120.0), config());

    assert_eq!(host.visual(WINDOW).borrow().mounts, 1);
    assert_eq!(
        host.listens,
        vec![
            (WINDOW, EventKind::KeyDown),
            (WINDOW, EventKind::PointerUp),
            (WINDOW, EventKind::Wheel),
        ]
    );
    assert_eq!(tracker.state().last_rect, None);
    assert!(!tracker.state().visible);
    assert!(!tracker.state().busy);
}

#[test]
fn broad_listen_set_subscribes_to_everything() {
    let config = TrackerConfig {
        listen: ListenSet::Broad,
        ..config()
    };
    let (mut tracker, _doc, host) = build(Layout::editor_with_caret(40.0, 120.0), config);

    assert_eq!(host.listens.len(), 7);
    tracker.on_event(&CaretEvent::new(EventKind::TouchEnd, EDITOR));
    tracker.on_frame();
    assert_eq!(tracker.resolution_count(), 1);
}

#[test]
fn unsubscribed_kinds_are_ignored() {
    let (mut tracker, _doc, _host) = build(Layout::editor_with_caret(40.0, 120.0), config());

    tracker.on_event(&CaretEvent::new(EventKind::KeyUp, EDITOR));
    tracker.on_frame();
    assert_eq!(tracker.resolution_count(), 0);
    assert!(!tracker.state().busy);
}

#[test]
fn resolution_waits_for_a_frame() {
    let (mut tracker, _doc, _host) = build(Layout::editor_with_caret(40.0, 120.0), config());

    tracker.on_event(&keydown());
    assert!(tracker.state().busy);
    assert!(tracker.state().visible);
    assert_eq!(tracker.state().anchor, Some(EDITOR));
    assert_eq!(tracker.resolution_count(), 0);

    tracker.on_frame();
    assert_eq!(tracker.resolution_count(), 1);
    assert!(!tracker.state().busy);
    assert_eq!(tracker.state().anchor_top, 100.0);
}

#[test]
fn first_position_is_a_silent_baseline_by_default() {
    let (mut tracker, _doc, host) = build(Layout::editor_with_caret(40.0, 120.0), config());

    tracker.on_event(&keydown());
    tracker.on_frame();

    assert_eq!(
        tracker.state().last_rect,
        Some(Rect::new(40.0, 120.0, 0.0, 18.0))
    );
    assert!(host.visual(WINDOW).borrow().writes.is_empty());
}

#[test]
fn first_position_can_be_rendered_in_place() {
    let config = TrackerConfig {
        first_position: FirstPosition::Render,
        ..config()
    };
    let (mut tracker, _doc, host) = build(Layout::editor_with_caret(40.0, 120.0), config);

    tracker.on_event(&keydown());
    tracker.on_frame();

    assert_eq!(
        host.visual(WINDOW).borrow().writes,
        vec![VisualUpdate::Place(CaretStyle {
            from: Point::new(40.0, 120.0),
            to: Point::new(40.0, 120.0),
            offset_y: 0.0,
            height: 20.0,
            visible: true,
            animate: false,
        })]
    );
}

#[test]
fn identical_triggers_write_nothing() {
    let (mut tracker, _doc, host) = build(Layout::editor_with_caret(40.0, 120.0), config());

    for _ in 0..3 {
        tracker.on_event(&keydown());
        tracker.on_frame();
        tracker.on_frame();
    }

    assert_eq!(tracker.resolution_count(), 3);
    assert!(host.visual(WINDOW).borrow().writes.is_empty());
}

#[test]
fn animated_move_commits_on_the_following_frame() {
    let (mut tracker, doc, host) = build(Layout::editor_with_caret(40.0, 120.0), config());
    tracker.on_event(&keydown());
    tracker.on_frame();

    doc.layout.borrow_mut().move_caret(80.0, 120.0);
    tracker.on_event(&keydown());
    tracker.on_frame();

    let place = VisualUpdate::Place(CaretStyle {
        from: Point::new(40.0, 120.0),
        to: Point::new(80.0, 120.0),
        offset_y: 0.0,
        height: 20.0,
        visible: true,
        animate: true,
    });
    assert_eq!(host.visual(WINDOW).borrow().writes, vec![place]);
    assert_eq!(tracker.state().last_rect.map(|r| r.x), Some(40.0));

    tracker.on_frame();
    assert_eq!(
        host.visual(WINDOW).borrow().writes,
        vec![place, VisualUpdate::Restart]
    );
    assert_eq!(tracker.state().last_rect.map(|r| r.x), Some(80.0));
}

#[test]
fn line_height_comes_from_the_active_line_when_taller() {
    let mut layout = Layout::editor_with_caret(40.0, 120.0);
    layout
        .markers
        .insert((EDITOR, caret_core::Marker::ActiveLine), LINE);
    layout.rects.insert(LINE, Rect::new(0.0, 118.0, 600.0, 28.0));
    layout.line_heights.insert(LINE, 28.0);
    let (mut tracker, doc, host) = build(layout, config());

    tracker.on_event(&keydown());
    tracker.on_frame();
    doc.layout.borrow_mut().move_caret(60.0, 120.0);
    tracker.on_event(&keydown());
    tracker.on_frame();

    let writes = host.visual(WINDOW).borrow().placements();
    assert!(matches!(
        writes.as_slice(),
        [VisualUpdate::Place(CaretStyle { height, .. })] if *height == 28.0
    ));
}

#[test]
fn non_editable_target_hides_without_resolving() {
    let (mut tracker, _doc, host) = build(Layout::editor_with_caret(40.0, 120.0), config());
    tracker.on_event(&keydown());
    tracker.on_frame();

    tracker.on_event(&CaretEvent::new(EventKind::PointerUp, TOOLBAR));
    assert!(!tracker.state().visible);
    assert!(!tracker.state().busy);
    tracker.on_frame();

    assert_eq!(tracker.resolution_count(), 1);
    assert_eq!(tracker.state().anchor, Some(EDITOR));
    assert_eq!(host.visual(WINDOW).borrow().writes, vec![VisualUpdate::Hide]);

    // Already hidden: nothing more to write.
    tracker.on_event(&CaretEvent::new(EventKind::PointerUp, TOOLBAR));
    assert_eq!(host.visual(WINDOW).borrow().writes.len(), 1);
}

#[test]
fn showing_again_in_place_redraws_the_caret() {
    let (mut tracker, doc, host) = build(Layout::editor_with_caret(40.0, 120.0), config());
    tracker.on_event(&keydown());
    tracker.on_frame();
    doc.layout.borrow_mut().move_caret(80.0, 120.0);
    tracker.on_event(&keydown());
    tracker.on_frame();
    tracker.on_frame();

    tracker.on_event(&CaretEvent::new(EventKind::PointerUp, TOOLBAR));
    let hidden_at = host.visual(WINDOW).borrow().writes.len();

    tracker.on_event(&CaretEvent::new(EventKind::PointerUp, EDITOR));
    tracker.on_frame();
    tracker.on_frame();

    assert!(tracker.state().visible);
    assert_eq!(
        host.visual(WINDOW).borrow().writes[hidden_at..],
        [VisualUpdate::Place(CaretStyle {
            from: Point::new(80.0, 120.0),
            to: Point::new(80.0, 120.0),
            offset_y: 0.0,
            height: 20.0,
            visible: true,
            animate: false,
        })]
    );

    // Shown and unchanged: back to writing nothing.
    tracker.on_event(&keydown());
    tracker.on_frame();
    tracker.on_frame();
    assert_eq!(host.visual(WINDOW).borrow().writes.len(), hidden_at + 1);
}

#[test]
fn untargeted_event_counts_as_non_editable() {
    let (mut tracker, _doc, _host) = build(Layout::editor_with_caret(40.0, 120.0), config());

    tracker.on_event(&CaretEvent::untargeted(EventKind::KeyDown));
    tracker.on_frame();

    assert!(!tracker.state().visible);
    assert_eq!(tracker.resolution_count(), 0);
}

#[test]
fn overlapping_triggers_run_one_resolution() {
    let (mut tracker, doc, _host) = build(Layout::editor_with_caret(40.0, 120.0), config());

    tracker.on_event(&keydown());
    doc.layout.borrow_mut().move_caret(90.0, 140.0);
    tracker.on_event(&keydown());
    tracker.on_event(&CaretEvent::new(EventKind::PointerUp, TOOLBAR));
    tracker.on_frame();

    assert_eq!(tracker.resolution_count(), 1);
    // The dropped non-editable trigger never touched visibility.
    assert!(tracker.state().visible);
    assert!(!tracker.state().busy);
}

#[test]
fn busy_clears_when_resolution_fails() {
    let (mut tracker, doc, host) = build(Layout::editor_with_caret(40.0, 120.0), config());
    tracker.on_event(&keydown());
    tracker.on_frame();

    doc.layout.borrow_mut().detached.insert(EDITOR);
    tracker.on_event(&keydown());
    tracker.on_frame();

    assert_eq!(tracker.resolution_count(), 2);
    assert!(!tracker.state().busy);
    assert_eq!(tracker.state().last_rect.map(|r| r.x), Some(40.0));
    assert!(host.visual(WINDOW).borrow().writes.is_empty());

    doc.layout.borrow_mut().detached.clear();
    tracker.on_event(&keydown());
    tracker.on_frame();
    assert_eq!(tracker.resolution_count(), 3);
}

#[test]
fn degenerate_selection_never_publishes_the_origin() {
    let (mut tracker, doc, host) = build(Layout::editor_with_caret(40.0, 120.0), config());
    tracker.on_event(&keydown());
    tracker.on_frame();

    doc.layout.borrow_mut().move_caret(0.0, 0.0);
    tracker.on_event(&keydown());
    tracker.on_frame();
    tracker.on_frame();

    assert!(host.visual(WINDOW).borrow().writes.is_empty());
    assert_eq!(tracker.state().last_rect.map(|r| r.x), Some(40.0));
}

#[test]
fn degenerate_selection_is_corrected_from_the_container() {
    let (mut tracker, doc, host) = build(Layout::editor_with_caret(40.0, 120.0), config());
    tracker.on_event(&keydown());
    tracker.on_frame();

    {
        let mut layout = doc.layout.borrow_mut();
        layout.move_caret(0.0, 0.0);
        layout.container_len = 6;
        let start = caret_core::TextPosition::new(TEXT, 0);
        let end = caret_core::TextPosition::new(TEXT, 6);
        layout
            .ranges
            .insert((start, end), Rect::new(12.0, 140.0, 50.0, 18.0));
    }
    tracker.on_event(&keydown());
    tracker.on_frame();

    let writes = host.visual(WINDOW).borrow().placements();
    assert!(matches!(
        writes.as_slice(),
        [VisualUpdate::Place(CaretStyle { to, .. })] if *to == Point::new(12.0, 140.0)
    ));
}

#[test]
fn teardown_is_idempotent_and_final() {
    let (mut tracker, _doc, host) = build(Layout::editor_with_caret(40.0, 120.0), config());

    tracker.teardown();
    tracker.teardown();
    assert!(tracker.is_torn_down());
    assert_eq!(host.visual(WINDOW).borrow().unmounts, 1);

    tracker.on_event(&keydown());
    tracker.on_scroll();
    tracker.on_frame();
    assert_eq!(tracker.resolution_count(), 0);
    assert!(!tracker.scroll_settling());
}

#[test]
fn resolution_in_flight_at_teardown_is_tolerated() {
    let (mut tracker, doc, host) = build(Layout::editor_with_caret(40.0, 120.0), config());
    tracker.on_event(&keydown());
    tracker.on_frame();

    doc.layout.borrow_mut().move_caret(80.0, 120.0);
    tracker.on_event(&keydown());
    tracker.teardown();
    tracker.on_frame();

    assert_eq!(tracker.resolution_count(), 2);
    assert!(!tracker.state().busy);
    assert!(host.visual(WINDOW).borrow().writes.is_empty());
}
