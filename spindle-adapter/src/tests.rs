use crate::*;

use alloc::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::vec::Vec;
use std::vec;

use spindle::{Axis, Deceleration, Rect, ScrollPhase, WheelError, WheelOptions};

fn options(count: usize, circular: bool) -> WheelOptions {
    WheelOptions::uniform(count, 100)
        .with_selector(Rect {
            main: 100,
            cross: 300,
        })
        .with_initial_rect(Some(Rect {
            main: 300,
            cross: 300,
        }))
        .with_circular(circular)
        .with_deceleration(Deceleration {
            rate: 1000.0,
            min_velocity: 10.0,
        })
}

fn picker(count: usize, circular: bool) -> Picker {
    Picker::new(options(count, circular))
}

fn record_selections(p: &mut Picker) -> Arc<Mutex<Vec<usize>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    p.on_value_selected(move |i| sink.lock().unwrap().push(i));
    log
}

fn record_phases(p: &mut Picker) -> Arc<Mutex<Vec<ScrollPhase>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    p.on_phase_changed(move |phase| sink.lock().unwrap().push(phase));
    log
}

fn run_settle(p: &mut Picker, start_ms: u64) {
    let mut now = start_ms;
    while p.is_settling() {
        now += 16;
        p.tick(now);
        assert!(now < start_ms + 10_000, "settle did not converge");
    }
}

#[test]
fn releasing_at_rest_on_a_centered_item_commits_immediately() {
    let mut p = picker(5, false);
    let selections = record_selections(&mut p);

    p.drag_started();
    p.drag_moved(200, 0);
    assert_eq!(p.scroll_offset(), 200);

    p.drag_released(0.0, 0);
    assert_eq!(p.phase(), ScrollPhase::Idle);
    assert_eq!(p.scroll_offset(), 200);
    assert_eq!(*selections.lock().unwrap(), vec![2]);
}

#[test]
fn release_between_items_settles_on_the_nearest() {
    let mut p = picker(5, false);
    let selections = record_selections(&mut p);

    p.drag_started();
    p.drag_moved(230, 0);
    p.drag_released(0.0, 0);
    assert_eq!(p.phase(), ScrollPhase::Settling);
    assert_eq!(p.selected(), Some(2));

    run_settle(&mut p, 0);
    assert_eq!(p.scroll_offset(), 200);
    assert_eq!(*selections.lock().unwrap(), vec![2]);
}

#[test]
fn gesture_walks_through_all_phases() {
    let mut p = picker(5, false);
    let phases = record_phases(&mut p);

    p.drag_started();
    p.drag_moved(230, 0);
    p.drag_released(0.0, 0);
    run_settle(&mut p, 0);

    assert_eq!(
        *phases.lock().unwrap(),
        vec![
            ScrollPhase::Dragging,
            ScrollPhase::Settling,
            ScrollPhase::Idle
        ]
    );
}

#[test]
fn circular_backward_fling_wraps_to_the_last_item() {
    let mut p = picker(5, true);
    let selections = record_selections(&mut p);

    p.drag_started();
    p.drag_released(-500.0, 0);
    assert_eq!(p.phase(), ScrollPhase::Settling);

    run_settle(&mut p, 0);
    assert_eq!(p.scroll_offset(), -100);
    assert_eq!(p.selected(), Some(4));
    assert_eq!(*selections.lock().unwrap(), vec![4]);
}

struct DynSource {
    count: AtomicUsize,
    extent: u32,
}

impl WheelSource for DynSource {
    fn item_count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    fn item_extent(&self, _index: usize, _axis: Axis) -> u32 {
        self.extent
    }
}

#[test]
fn count_shrink_clamps_selection_and_notifies() {
    let source = Arc::new(DynSource {
        count: AtomicUsize::new(5),
        extent: 100,
    });
    let mut p = Picker::with_source(source.clone(), options(0, false));
    p.jump_to(4);
    assert_eq!(p.last_notified(), Some(4));

    let selections = record_selections(&mut p);
    source.count.store(3, Ordering::Relaxed);
    p.refresh();

    assert_eq!(p.selected(), Some(2));
    assert_eq!(p.last_notified(), Some(2));
    assert_eq!(*selections.lock().unwrap(), vec![2]);
}

#[test]
fn replacing_the_source_forgets_the_last_notification() {
    let first = Arc::new(DynSource {
        count: AtomicUsize::new(5),
        extent: 100,
    });
    let mut p = Picker::with_source(first, options(0, false));
    p.jump_to(2);
    assert_eq!(p.last_notified(), Some(2));

    let selections = record_selections(&mut p);
    let second = Arc::new(DynSource {
        count: AtomicUsize::new(5),
        extent: 100,
    });
    p.set_source(second);

    // Same index, but the dedup state was reset, so it reports again.
    assert_eq!(p.phase(), ScrollPhase::Idle);
    assert_eq!(*selections.lock().unwrap(), vec![2]);
}

#[test]
fn negative_selector_extent_is_rejected() {
    let mut p = picker(5, false);
    assert_eq!(
        p.set_selector_extent(Axis::Vertical, -10),
        Err(WheelError::NegativeSelectorExtent {
            axis: Axis::Vertical,
            extent: -10,
        })
    );
    // The configuration is untouched.
    assert_eq!(p.selector_extent(Axis::Vertical), 100);
}

#[test]
fn zero_selector_extent_still_resolves_a_selection() {
    let mut p = picker(5, false);
    p.set_selector_extent(Axis::Vertical, 0).unwrap();
    assert_eq!(p.padding(), 150);

    let selections = record_selections(&mut p);
    p.drag_started();
    p.drag_moved(200, 0);
    p.drag_released(0.0, 0);
    assert_eq!(p.phase(), ScrollPhase::Idle);
    assert_eq!(*selections.lock().unwrap(), vec![2]);
}

#[test]
fn repeated_settles_on_one_index_notify_once() {
    let mut p = picker(5, false);
    let selections = record_selections(&mut p);

    p.drag_started();
    p.drag_moved(200, 0);
    p.drag_released(0.0, 0);

    p.drag_started();
    p.drag_moved(30, 0);
    p.drag_released(0.0, 16);
    run_settle(&mut p, 16);

    assert_eq!(p.scroll_offset(), 200);
    assert_eq!(*selections.lock().unwrap(), vec![2]);
}

#[test]
fn first_settle_notifies_even_when_the_index_is_unchanged() {
    let mut p = picker(5, false);
    let selections = record_selections(&mut p);

    p.drag_started();
    p.drag_released(0.0, 0);
    assert_eq!(*selections.lock().unwrap(), vec![0]);
}

#[test]
fn new_drag_discards_the_pending_target() {
    let mut p = picker(5, false);
    let selections = record_selections(&mut p);

    p.drag_started();
    p.drag_moved(230, 0);
    p.drag_released(0.0, 0);
    p.tick(16);
    assert!(p.is_settling());

    p.drag_started();
    assert_eq!(p.phase(), ScrollPhase::Dragging);
    assert!(!p.is_settling());
    assert_eq!(p.tick(32), None);
    assert!(selections.lock().unwrap().is_empty());
}

#[test]
fn circular_change_applies_to_the_next_settle_only() {
    let mut p = picker(5, false);
    let selections = record_selections(&mut p);

    p.drag_started();
    p.drag_moved(20, 0);
    p.drag_released(-5_000.0, 0);
    assert_eq!(p.phase(), ScrollPhase::Settling);

    // The committed target (clamped to item 0) survives the mode change.
    p.set_circular(true);
    run_settle(&mut p, 0);
    assert_eq!(p.scroll_offset(), 0);
    assert_eq!(*selections.lock().unwrap(), vec![0]);

    // The next fling computes against the circular layout and wraps.
    p.drag_started();
    p.drag_released(-500.0, 1_000);
    run_settle(&mut p, 1_000);
    assert_eq!(p.scroll_offset(), -100);
    assert_eq!(*selections.lock().unwrap(), vec![0, 4]);
}

#[test]
fn select_animates_toward_the_requested_item() {
    let mut p = picker(5, false);
    let selections = record_selections(&mut p);

    p.select(3, 0);
    assert_eq!(p.phase(), ScrollPhase::Settling);
    assert_eq!(p.selected(), Some(3));

    run_settle(&mut p, 0);
    assert_eq!(p.scroll_offset(), 300);
    assert_eq!(*selections.lock().unwrap(), vec![3]);
}

#[test]
fn jump_to_clamps_out_of_range_indexes() {
    let mut p = picker(5, false);
    let selections = record_selections(&mut p);

    p.jump_to(99);
    assert_eq!(p.phase(), ScrollPhase::Idle);
    assert_eq!(p.scroll_offset(), 400);
    assert_eq!(*selections.lock().unwrap(), vec![4]);
}

#[test]
fn circular_select_takes_the_shortest_path() {
    let mut p = picker(5, true);
    p.select(4, 0);
    run_settle(&mut p, 0);

    // One step backward beats four steps forward.
    assert_eq!(p.scroll_offset(), -100);
    assert_eq!(p.selected(), Some(4));
}

#[test]
fn axis_change_recenters_the_selection_without_renotifying() {
    let mut p = picker(5, false);
    p.jump_to(3);

    let selections = record_selections(&mut p);
    p.set_axis(Axis::Horizontal);

    assert_eq!(p.axis(), Axis::Horizontal);
    assert_eq!(p.selected(), Some(3));
    assert_eq!(p.scroll_offset(), 300);
    assert!(selections.lock().unwrap().is_empty());
}

#[test]
fn empty_wheel_release_returns_to_idle_without_notifying() {
    let mut p = picker(0, false);
    let selections = record_selections(&mut p);
    let phases = record_phases(&mut p);

    p.drag_started();
    p.drag_released(-500.0, 0);

    assert_eq!(p.phase(), ScrollPhase::Idle);
    assert!(selections.lock().unwrap().is_empty());
    assert_eq!(
        *phases.lock().unwrap(),
        vec![ScrollPhase::Dragging, ScrollPhase::Idle]
    );
}

#[test]
fn settle_offsets_advance_monotonically() {
    let mut p = picker(100, false);
    p.select(50, 0);

    let target = p.wheel().centered_offset(50).unwrap();
    let mut last = p.scroll_offset();
    for now_ms in [0u64, 16, 40, 80, 120, 200, 250, 300] {
        if let Some(off) = p.tick(now_ms) {
            assert!(off >= last);
            last = off;
        }
    }
    assert!(!p.is_settling());
    assert_eq!(p.scroll_offset(), target);
}

#[test]
fn scrolled_events_account_for_every_applied_delta() {
    let mut p = picker(5, false);
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    p.on_scrolled(move |main, cross| sink.lock().unwrap().push((main, cross)));

    p.drag_started();
    p.drag_moved(230, 7);
    p.drag_released(0.0, 0);
    run_settle(&mut p, 0);

    let log = log.lock().unwrap();
    assert_eq!(log[0], (230, 7));
    let total: i64 = log.iter().map(|(main, _)| main).sum();
    assert_eq!(total, p.scroll_offset());
}

#[test]
fn tween_sample_ends_exactly_on_target() {
    let t = Tween::new(-50, 200, 0, 100, Easing::SmoothStep);
    assert_eq!(t.sample(0), -50);
    assert_eq!(t.sample(100), 200);
    assert!(t.is_done(100));
    assert!(!t.is_done(99));

    let mut retargeted = t;
    retargeted.retarget(50, 0, 100);
    assert_eq!(retargeted.sample(150), 0);
}
