/// The scroll axis of a wheel.
///
/// Orientation is a layout hint for adapters: the core math is axis-agnostic
/// and always works along the "main" extent. Adapters are expected to rebind
/// their extent hook when the axis changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    /// Toward increasing scroll offsets (higher slots).
    Forward,
    /// Toward decreasing scroll offsets (lower slots).
    Backward,
}

/// The lifecycle of a wheel gesture.
///
/// Transitions: `Idle → Dragging` (touch down), `Dragging → Settling`
/// (release), `Idle → Settling` (programmatic scroll), `Settling → Idle`
/// (target reached), `Settling → Dragging` (interrupted by a new touch).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPhase {
    #[default]
    Idle,
    Dragging,
    Settling,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub main: u32,
    pub cross: u32,
}

/// Layout span of one wheel slot along the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSpan {
    /// The underlying slot (unbounded in circular mode).
    pub slot: i64,
    /// The logical item index the slot maps to.
    pub index: usize,
    /// Start offset in list space (includes the centering padding).
    pub start: i64,
    /// Extent in the scroll axis.
    pub extent: u32,
}

impl ItemSpan {
    pub fn end(&self) -> i64 {
        self.start.saturating_add(self.extent as i64)
    }

    pub fn center(&self) -> i64 {
        self.start.saturating_add((self.extent / 2) as i64)
    }
}

/// The resting point a scroll gesture should settle at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapTarget {
    /// Slot whose center coincides with the viewport center at `offset`.
    pub slot: i64,
    /// Logical item index of `slot`.
    pub index: usize,
    /// Scroll offset that centers `slot`.
    pub offset: i64,
}
