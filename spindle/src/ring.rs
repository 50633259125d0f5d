//! Mapping between unbounded slots and bounded logical item indexes.
//!
//! In circular mode the wheel scrolls over slots from the whole `i64` range;
//! `slot.rem_euclid(count)` is the logical item a slot shows. Non-circular
//! wheels use slots `0..count` directly, with clamping instead of wrapping.

/// Returns the logical item index shown at `slot`.
///
/// `None` when the wheel is empty (the unresolved sentinel; an empty wheel
/// is a normal transient state).
pub fn logical_of(slot: i64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(slot.rem_euclid(count as i64) as usize)
}

/// Returns the slot nearest to `reference` that maps to `index`.
///
/// This is the circular shortest path: the result is never more than
/// `count / 2` slots away from `reference`. When the two directions are
/// exactly equidistant (even counts), the lower slot wins.
///
/// `None` when the wheel is empty or `index` is out of range.
pub fn nearest_slot(index: usize, reference: i64, count: usize) -> Option<i64> {
    if count == 0 || index >= count {
        return None;
    }
    let n = count as i64;
    let mut delta = (index as i64) - reference.rem_euclid(n);
    if delta < 0 {
        delta += n;
    }
    // delta is the forward distance in [0, n); going backward costs delta - n.
    if delta * 2 >= n {
        delta -= n;
    }
    Some(reference + delta)
}

/// Non-circular counterpart of [`nearest_slot`]: slots and indexes coincide,
/// out-of-range values clamp to the valid range instead of wrapping.
pub fn clamp_slot(slot: i64, count: usize) -> Option<i64> {
    if count == 0 {
        return None;
    }
    Some(slot.clamp(0, count as i64 - 1))
}
