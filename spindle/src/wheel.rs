use alloc::sync::Arc;

use crate::extents::ExtentTable;
use crate::ring;
use crate::{Axis, ItemSpan, Rect, ScrollDirection, SnapTarget, WheelOptions};

/// A headless snap-to-center wheel.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by providing viewport geometry and scroll
///   offsets reported by the host list.
/// - It answers geometry questions: which slot is centered, where a fling
///   should come to rest, how much centering padding the host must apply.
///
/// For the gesture phase machine, settle tween, and listener dispatch, see
/// the `spindle-adapter` crate.
#[derive(Clone, Debug)]
pub struct Wheel {
    options: WheelOptions,
    viewport: Rect,
    scroll_offset: i64,
    table: ExtentTable,
}

impl Wheel {
    pub fn new(options: WheelOptions) -> Self {
        let viewport = options.initial_rect.unwrap_or_default();
        sdebug!(
            count = options.count,
            circular = options.circular,
            "Wheel::new"
        );
        if options.selector.main == 0 {
            swarn!("selector extent is zero; centering is nominal only");
        }
        let mut wheel = Self {
            viewport,
            scroll_offset: 0,
            table: ExtentTable::default(),
            options,
        };
        wheel.rebuild();
        wheel.scroll_offset = wheel.initial_offset();
        wheel
    }

    fn rebuild(&mut self) {
        self.table
            .rebuild(self.options.count, &self.options.item_extent);
    }

    fn initial_offset(&self) -> i64 {
        if self.options.count == 0 {
            return 0;
        }
        let slot = self.options.initial_index.min(self.options.count - 1) as i64;
        self.centered_offset(slot).unwrap_or(0)
    }

    pub fn options(&self) -> &WheelOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: WheelOptions) {
        let prev_count = self.options.count;
        let prev_selector = self.options.selector;
        let extent_unchanged = Arc::ptr_eq(&self.options.item_extent, &options.item_extent);
        self.options = options;
        strace!(
            count = self.options.count,
            circular = self.options.circular,
            "Wheel::set_options"
        );

        if self.options.count != prev_count || !extent_unchanged {
            self.rebuild();
        }
        if self.options.selector != prev_selector && self.options.selector.main == 0 {
            swarn!("selector extent is zero; centering is nominal only");
        }
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`, which decides whether the extent table needs a rebuild.
    pub fn update_options(&mut self, f: impl FnOnce(&mut WheelOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.rebuild();
    }

    pub fn axis(&self) -> Axis {
        self.options.axis
    }

    pub fn set_axis(&mut self, axis: Axis) {
        self.options.axis = axis;
    }

    pub fn circular(&self) -> bool {
        self.options.circular
    }

    pub fn set_circular(&mut self, circular: bool) {
        self.options.circular = circular;
    }

    pub fn selector(&self) -> Rect {
        self.options.selector
    }

    pub fn set_selector(&mut self, selector: Rect) {
        if self.options.selector == selector {
            return;
        }
        self.options.selector = selector;
        if selector.main == 0 {
            swarn!("selector extent is zero; centering is nominal only");
        }
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    pub fn set_viewport_size(&mut self, main: u32) {
        self.viewport.main = main;
    }

    pub fn scroll_offset(&self) -> i64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: i64) {
        self.scroll_offset = offset;
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: i64) {
        self.scroll_offset = self.clamp_offset(offset);
    }

    /// Symmetric leading/trailing padding the host list must apply along the
    /// scroll axis so the first and last items can each reach the viewport
    /// center.
    pub fn padding(&self) -> u32 {
        self.viewport.main.saturating_sub(self.options.selector.main) / 2
    }

    /// Sum of all item extents; the stride of one full revolution in
    /// circular mode.
    pub fn period(&self) -> i64 {
        self.table.total()
    }

    /// Full list extent including both pads (meaningful when non-circular).
    pub fn content_size(&self) -> i64 {
        (self.padding() as i64) * 2 + self.table.total()
    }

    pub fn item_extent(&self, index: usize) -> Option<u32> {
        (index < self.table.len()).then(|| self.table.extent_of(index))
    }

    /// Logical item index shown at `slot` (wrapping when circular, clamping
    /// otherwise). `None` when the wheel is empty.
    pub fn slot_index(&self, slot: i64) -> Option<usize> {
        if self.options.circular {
            ring::logical_of(slot, self.options.count)
        } else {
            ring::clamp_slot(slot, self.options.count).map(|s| s as usize)
        }
    }

    fn cycle_and_index(&self, slot: i64) -> Option<(i64, usize)> {
        let n = self.options.count;
        if n == 0 {
            return None;
        }
        if self.options.circular {
            let n = n as i64;
            Some((slot.div_euclid(n), slot.rem_euclid(n) as usize))
        } else {
            Some((0, ring::clamp_slot(slot, n)? as usize))
        }
    }

    fn content_center(&self, cycle: i64, index: usize) -> i64 {
        cycle * self.table.total() + self.table.center_of(index)
    }

    /// Layout span of `slot` in list space (leading padding included).
    pub fn span(&self, slot: i64) -> Option<ItemSpan> {
        let (cycle, index) = self.cycle_and_index(slot)?;
        let start = self.padding() as i64 + cycle * self.table.total() + self.table.start_of(index);
        Some(ItemSpan {
            slot: cycle * self.options.count as i64 + index as i64,
            index,
            start,
            extent: self.table.extent_of(index),
        })
    }

    /// Scroll offset that aligns `slot`'s center with the viewport center
    /// (and therefore the selector center).
    pub fn centered_offset(&self, slot: i64) -> Option<i64> {
        let (cycle, index) = self.cycle_and_index(slot)?;
        let center = self.content_center(cycle, index);
        Some(self.padding() as i64 + center - (self.viewport.main / 2) as i64)
    }

    /// The slot whose center is nearest to the viewport center at `offset`.
    ///
    /// Exact ties resolve toward `bias` when given (the direction of
    /// motion), otherwise to the lower slot.
    pub fn centered_slot_at(&self, offset: i64, bias: Option<ScrollDirection>) -> Option<i64> {
        let n = self.options.count;
        if n == 0 {
            return None;
        }
        let prefer_higher = matches!(bias, Some(ScrollDirection::Forward));
        // Content-space position currently under the viewport center.
        let pos = offset - self.padding() as i64 + (self.viewport.main / 2) as i64;

        if !self.options.circular {
            return self.table.nearest_center(pos, prefer_higher).map(|i| i as i64);
        }

        let period = self.table.total();
        if period <= 0 {
            swarn!("circular wheel with zero total extent; no centered slot");
            return None;
        }

        let cycle = pos.div_euclid(period);
        let wrapped = pos.rem_euclid(period);
        let n = n as i64;
        let interior = self.table.nearest_center(wrapped, prefer_higher)?;

        // The only competitors across a revolution boundary are the last
        // item of the previous cycle and the first of the next.
        let mut best: Option<(i64, i64)> = None;
        for (cyc, idx) in [
            (cycle, interior),
            (cycle - 1, (n - 1) as usize),
            (cycle + 1, 0),
        ] {
            let slot = cyc * n + idx as i64;
            let dist = (self.content_center(cyc, idx) - pos).abs();
            let better = match best {
                None => true,
                Some((best_slot, best_dist)) => {
                    dist < best_dist
                        || (dist == best_dist
                            && if prefer_higher {
                                slot > best_slot
                            } else {
                                slot < best_slot
                            })
                }
            };
            if better {
                best = Some((slot, dist));
            }
        }
        best.map(|(slot, _)| slot)
    }

    /// Logical index of the item centered at `offset`.
    pub fn centered_index_at(&self, offset: i64, bias: Option<ScrollDirection>) -> Option<usize> {
        let slot = self.centered_slot_at(offset, bias)?;
        self.slot_index(slot)
    }

    /// Slot nearest to the `reference` slot that shows `index`; used to
    /// re-center a selection with minimal travel. Out-of-range indexes clamp
    /// to the last valid item.
    pub fn nearest_slot_for(&self, index: usize, reference: i64) -> Option<i64> {
        let n = self.options.count;
        if n == 0 {
            return None;
        }
        let index = index.min(n - 1);
        if self.options.circular {
            ring::nearest_slot(index, reference, n)
        } else {
            Some(index as i64)
        }
    }

    /// Offsets centering the first and last item; the scroll range when
    /// non-circular. `None` when the wheel is empty or circular (unbounded).
    pub fn offset_bounds(&self) -> Option<(i64, i64)> {
        if self.options.circular || self.options.count == 0 {
            return None;
        }
        let min = self.centered_offset(0)?;
        let max = self.centered_offset(self.options.count as i64 - 1)?;
        Some((min, max))
    }

    pub fn clamp_offset(&self, offset: i64) -> i64 {
        match self.offset_bounds() {
            Some((min, max)) => offset.clamp(min, max),
            None => offset,
        }
    }

    /// Computes where a gesture released at `offset` with `velocity` (px/s,
    /// positive toward increasing offsets) must come to rest so that exactly
    /// one item is centered.
    ///
    /// The projection is made once from the release-time state; callers keep
    /// the returned target for the whole settle instead of recomputing it.
    /// `None` when the wheel is empty.
    pub fn snap_target(&self, offset: i64, velocity: f32) -> Option<SnapTarget> {
        if self.options.count == 0 {
            return None;
        }
        if self.options.selector.main == 0 {
            swarn!("selector extent is zero; snapping to a nominal center");
        }

        let projected = offset.saturating_add(self.options.deceleration.stop_distance(velocity));
        let projected = self.clamp_offset(projected);
        let bias = if velocity > 0.0 {
            Some(ScrollDirection::Forward)
        } else if velocity < 0.0 {
            Some(ScrollDirection::Backward)
        } else {
            None
        };

        let slot = self.centered_slot_at(projected, bias)?;
        let index = self.slot_index(slot)?;
        let target = self.centered_offset(slot)?;
        strace!(offset, velocity, slot, index, target, "snap_target");
        Some(SnapTarget {
            slot,
            index,
            offset: target,
        })
    }
}
