use alloc::vec::Vec;

use crate::options::ExtentFn;

/// Per-item extents along the scroll axis, with prefix sums for offset math.
///
/// The table is rebuilt from the extent hook on reconfiguration and is
/// read-only during a layout or settle pass. Offsets here are in content
/// space: `0` is the start of the first item, padding excluded.
#[derive(Clone, Debug, Default)]
pub(crate) struct ExtentTable {
    extents: Vec<u32>,
    starts: Vec<i64>,
    total: i64,
}

impl ExtentTable {
    pub(crate) fn rebuild(&mut self, count: usize, extent: &ExtentFn) {
        self.extents.clear();
        self.starts.clear();
        self.extents.reserve_exact(count);
        self.starts.reserve_exact(count);

        let mut acc = 0i64;
        for i in 0..count {
            let e = extent(i);
            self.starts.push(acc);
            self.extents.push(e);
            acc = acc.saturating_add(e as i64);
        }
        self.total = acc;
    }

    pub(crate) fn len(&self) -> usize {
        self.extents.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    /// Sum of all extents; the stride of one full revolution in circular mode.
    pub(crate) fn total(&self) -> i64 {
        self.total
    }

    pub(crate) fn extent_of(&self, index: usize) -> u32 {
        self.extents[index]
    }

    pub(crate) fn start_of(&self, index: usize) -> i64 {
        self.starts[index]
    }

    pub(crate) fn center_of(&self, index: usize) -> i64 {
        self.starts[index] + (self.extents[index] / 2) as i64
    }

    /// Index whose center is nearest to the content-space position `pos`.
    ///
    /// On an exact tie the lower index wins, unless `prefer_higher` is set
    /// (snapping toward the direction of motion).
    pub(crate) fn nearest_center(&self, pos: i64, prefer_higher: bool) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        // First index whose center is >= pos; centers are non-decreasing.
        let mut lo = 0usize;
        let mut hi = self.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.center_of(mid) < pos {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        if lo == 0 {
            return Some(0);
        }
        if lo == self.len() {
            return Some(self.len() - 1);
        }

        let below = lo - 1;
        let above = lo;
        let d_below = pos - self.center_of(below);
        let d_above = self.center_of(above) - pos;
        if d_above < d_below || (d_above == d_below && prefer_higher) {
            Some(above)
        } else {
            Some(below)
        }
    }
}
