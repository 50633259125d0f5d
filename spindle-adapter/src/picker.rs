use alloc::sync::Arc;

use spindle::{
    Axis, Rect, ScrollPhase, SnapTarget, Wheel, WheelError, WheelOptions,
};

use crate::{Dispatcher, Easing, Tween, WheelSource};

/// Default settle animation length in milliseconds.
pub const DEFAULT_SETTLE_MS: u64 = 250;

#[derive(Clone, Copy, Debug)]
struct Settle {
    tween: Tween,
    /// Computed once at release time; never recomputed mid-settle.
    target: SnapTarget,
}

/// A framework-neutral wheel picker that wraps a [`spindle::Wheel`] and owns
/// the gesture lifecycle (Idle/Dragging/Settling), the settle tween, and
/// listener dispatch.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `set_viewport` on layout, then reading `padding()` back into the list
/// - `drag_started` / `drag_moved` / `drag_released(velocity)` for gestures
/// - `tick(now_ms)` each frame; the returned offset is applied to the real
///   scroll container
///
/// Everything runs on the host's event loop; listeners receive plain values
/// and cannot re-enter the picker.
#[derive(Clone)]
pub struct Picker {
    wheel: Wheel,
    source: Option<Arc<dyn WheelSource>>,
    dispatcher: Dispatcher,
    phase: ScrollPhase,
    settle: Option<Settle>,
    settle_ms: u64,
    easing: Easing,
}

impl Picker {
    pub fn new(options: WheelOptions) -> Self {
        Self {
            wheel: Wheel::new(options),
            source: None,
            dispatcher: Dispatcher::new(),
            phase: ScrollPhase::Idle,
            settle: None,
            settle_ms: DEFAULT_SETTLE_MS,
            easing: Easing::EaseOutCubic,
        }
    }

    /// Creates a picker that reads count and extents from `source`.
    pub fn with_source(source: Arc<dyn WheelSource>, options: WheelOptions) -> Self {
        let mut picker = Self::new(options);
        picker.set_source(source);
        picker
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn wheel_mut(&mut self) -> &mut Wheel {
        &mut self.wheel
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    pub fn scroll_offset(&self) -> i64 {
        self.wheel.scroll_offset()
    }

    /// Symmetric leading/trailing padding the host list must apply so edge
    /// items can reach the selector.
    pub fn padding(&self) -> u32 {
        self.wheel.padding()
    }

    /// The logical index currently considered selected: the committed settle
    /// target while settling, otherwise the item centered at the current
    /// offset. `None` when the wheel is empty.
    pub fn selected(&self) -> Option<usize> {
        if let Some(settle) = &self.settle {
            return Some(settle.target.index);
        }
        self.wheel.centered_index_at(self.wheel.scroll_offset(), None)
    }

    /// The most recent index reported to selection listeners.
    pub fn last_notified(&self) -> Option<usize> {
        self.dispatcher.last_notified()
    }

    pub fn on_phase_changed(&mut self, f: impl Fn(ScrollPhase) + Send + Sync + 'static) {
        self.dispatcher.on_phase_changed(f);
    }

    pub fn on_scrolled(&mut self, f: impl Fn(i64, i64) + Send + Sync + 'static) {
        self.dispatcher.on_scrolled(f);
    }

    pub fn on_value_selected(&mut self, f: impl Fn(usize) + Send + Sync + 'static) {
        self.dispatcher.on_value_selected(f);
    }

    pub fn settle_duration_ms(&self) -> u64 {
        self.settle_ms
    }

    pub fn set_settle_duration_ms(&mut self, duration_ms: u64) {
        self.settle_ms = duration_ms.max(1);
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    // --- configuration surface ------------------------------------------

    pub fn axis(&self) -> Axis {
        self.wheel.axis()
    }

    /// Changes the scroll axis. Invalidates any in-flight settle, rebinds
    /// per-axis extents, and re-centers the previously selected item.
    pub fn set_axis(&mut self, axis: Axis) {
        if self.wheel.axis() == axis {
            return;
        }
        let previous = self.selected();
        self.settle = None;
        self.wheel.set_axis(axis);
        self.rebind_source();
        self.restore_selection(previous);
    }

    pub fn circular(&self) -> bool {
        self.wheel.circular()
    }

    /// Changing circular mode mid-scroll is permitted; it applies to the
    /// next settle computation, not to a target already committed.
    pub fn set_circular(&mut self, circular: bool) {
        self.wheel.set_circular(circular);
    }

    pub fn selector_extent(&self, axis: Axis) -> u32 {
        let selector = self.wheel.selector();
        if axis == self.wheel.axis() {
            selector.main
        } else {
            selector.cross
        }
    }

    /// Sets the selector extent along `axis`. Negative extents are rejected;
    /// zero is accepted with degraded (nominal-center) snapping.
    pub fn set_selector_extent(&mut self, axis: Axis, extent: i32) -> Result<(), WheelError> {
        if extent < 0 {
            return Err(WheelError::NegativeSelectorExtent { axis, extent });
        }
        let mut selector = self.wheel.selector();
        let extent = extent as u32;
        if axis == self.wheel.axis() {
            if selector.main == extent {
                return Ok(());
            }
            selector.main = extent;
            let previous = self.selected();
            self.settle = None;
            self.wheel.set_selector(selector);
            self.restore_selection(previous);
        } else {
            // Cross extent does not participate in snapping or padding.
            selector.cross = extent;
            self.wheel.set_selector(selector);
        }
        Ok(())
    }

    /// Replaces the data source. The last notified selection becomes
    /// undefined and the picker returns to Idle, re-centered best-effort on
    /// the previously selected index.
    pub fn set_source(&mut self, source: Arc<dyn WheelSource>) {
        let previous = self.selected();
        self.settle = None;
        self.dispatcher.reset();
        self.source = Some(source);
        self.rebind_source();
        self.restore_selection(previous);
    }

    /// Re-reads the source after its data changed (e.g. item count). If the
    /// previously selected item no longer exists, the selection clamps to
    /// the last valid item and listeners are notified.
    pub fn refresh(&mut self) {
        let previous = self.selected();
        self.settle = None;
        self.rebind_source();
        self.restore_selection(previous);
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        if self.wheel.viewport() == viewport {
            return;
        }
        let previous = self.selected();
        self.settle = None;
        self.wheel.set_viewport(viewport);
        self.restore_selection(previous);
    }

    fn rebind_source(&mut self) {
        let Some(source) = &self.source else {
            return;
        };
        let count = source.item_count();
        let axis = self.wheel.axis();
        let extents = Arc::clone(source);
        self.wheel.update_options(move |o| {
            o.count = count;
            o.item_extent = Arc::new(move |i| extents.item_extent(i, axis));
        });
    }

    /// Jumps the viewport so `previous` (clamped to the current count) is
    /// centered again, commits Idle, and reports the settled index.
    fn restore_selection(&mut self, previous: Option<usize>) {
        let count = self.wheel.count();
        if count == 0 {
            self.set_phase(ScrollPhase::Idle);
            return;
        }
        let index = previous.unwrap_or(0).min(count - 1);
        let reference = self
            .wheel
            .centered_slot_at(self.wheel.scroll_offset(), None)
            .unwrap_or(0);
        let slot = self
            .wheel
            .nearest_slot_for(index, reference)
            .unwrap_or(index as i64);
        if let Some(offset) = self.wheel.centered_offset(slot) {
            self.wheel.set_scroll_offset(offset);
        }
        self.set_phase(ScrollPhase::Idle);
        self.dispatcher.settled(index);
    }

    // --- gesture lifecycle ----------------------------------------------

    /// Touch-down. Interrupts any settle in flight and discards its target.
    pub fn drag_started(&mut self) {
        self.settle = None;
        self.set_phase(ScrollPhase::Dragging);
    }

    /// Finger/pointer movement while dragging. Deltas are in pixels along
    /// the scroll (`delta_main`) and cross (`delta_cross`) axes.
    pub fn drag_moved(&mut self, delta_main: i64, delta_cross: i64) {
        if self.phase != ScrollPhase::Dragging {
            // Hosts may report movement without a touch-down (e.g. wheel input).
            self.drag_started();
        }
        let before = self.wheel.scroll_offset();
        self.wheel
            .set_scroll_offset_clamped(before.saturating_add(delta_main));
        let applied = self.wheel.scroll_offset() - before;
        self.dispatcher.scrolled(applied, delta_cross);
    }

    /// Release with `velocity` in px/s (positive toward increasing offsets;
    /// zero for a plain lift). Computes the snap target once and begins
    /// settling toward it.
    pub fn drag_released(&mut self, velocity: f32, now_ms: u64) {
        let from = self.wheel.scroll_offset();
        let Some(target) = self.wheel.snap_target(from, velocity) else {
            // Nothing to settle on; return to rest without notifying.
            pwarn!("release on an empty wheel; returning to idle");
            self.settle = None;
            self.set_phase(ScrollPhase::Idle);
            return;
        };
        self.begin_settle(from, target, now_ms);
    }

    /// Smoothly scrolls so `index` becomes the selection (Idle → Settling).
    /// Out-of-range indexes clamp to the last valid item; no-op when empty.
    pub fn select(&mut self, index: usize, now_ms: u64) {
        let Some(target) = self.target_for(index) else {
            return;
        };
        let from = self.wheel.scroll_offset();
        self.begin_settle(from, target, now_ms);
    }

    /// Centers `index` immediately, without animation, and commits it.
    pub fn jump_to(&mut self, index: usize) {
        let Some(target) = self.target_for(index) else {
            return;
        };
        self.settle = None;
        self.wheel.set_scroll_offset(target.offset);
        self.set_phase(ScrollPhase::Idle);
        self.dispatcher.settled(target.index);
    }

    fn target_for(&self, index: usize) -> Option<SnapTarget> {
        if self.wheel.count() == 0 {
            return None;
        }
        let reference = self
            .wheel
            .centered_slot_at(self.wheel.scroll_offset(), None)
            .unwrap_or(0);
        let slot = self.wheel.nearest_slot_for(index, reference)?;
        let offset = self.wheel.centered_offset(slot)?;
        let index = self.wheel.slot_index(slot)?;
        Some(SnapTarget {
            slot,
            index,
            offset,
        })
    }

    fn begin_settle(&mut self, from: i64, target: SnapTarget, now_ms: u64) {
        if from == target.offset {
            // Already resting on the target; commit without an animation.
            self.settle = None;
            self.set_phase(ScrollPhase::Idle);
            self.dispatcher.settled(target.index);
            return;
        }
        ptrace!(
            from,
            to = target.offset,
            index = target.index,
            "begin_settle"
        );
        self.settle = Some(Settle {
            tween: Tween::new(from, target.offset, now_ms, self.settle_ms, self.easing),
            target,
        });
        self.set_phase(ScrollPhase::Settling);
    }

    /// Advances the settle animation.
    ///
    /// Returns the offset the host must apply to its scroll container while
    /// a settle is in flight, `None` otherwise. Reaching the target commits
    /// the selection: the phase returns to Idle and the settled index is
    /// reported (deduplicated) to selection listeners.
    pub fn tick(&mut self, now_ms: u64) -> Option<i64> {
        let settle = self.settle?;

        let before = self.wheel.scroll_offset();
        let offset = settle.tween.sample(now_ms);
        self.wheel.set_scroll_offset(offset);
        let applied = offset - before;
        if applied != 0 {
            self.dispatcher.scrolled(applied, 0);
        }

        if settle.tween.is_done(now_ms) {
            self.settle = None;
            self.set_phase(ScrollPhase::Idle);
            self.dispatcher.settled(settle.target.index);
        }

        Some(self.wheel.scroll_offset())
    }

    fn set_phase(&mut self, phase: ScrollPhase) {
        if self.phase == phase {
            return;
        }
        self.phase = phase;
        self.dispatcher.phase_changed(phase);
    }
}

impl core::fmt::Debug for Picker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Picker")
            .field("wheel", &self.wheel)
            .field("phase", &self.phase)
            .field("settle", &self.settle)
            .field("settle_ms", &self.settle_ms)
            .field("easing", &self.easing)
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}
