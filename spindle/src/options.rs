use alloc::sync::Arc;

use crate::snap::Deceleration;
use crate::{Axis, Rect};

/// Hook that reports the extent of a logical item along the scroll axis.
///
/// Adapters bind this to their data source for the current axis; a constant
/// closure is the uniform-extent fast path.
pub type ExtentFn = Arc<dyn Fn(usize) -> u32 + Send + Sync>;

/// Configuration for [`crate::Wheel`].
///
/// Cheap to clone: the extent hook is stored in an `Arc` so adapters can
/// tweak a few fields and call `Wheel::set_options` without reallocating
/// closures.
#[derive(Clone)]
pub struct WheelOptions {
    /// Number of logical items.
    pub count: usize,
    /// Per-item extent along the scroll axis.
    pub item_extent: ExtentFn,
    /// Scroll axis hint; see [`Axis`].
    pub axis: Axis,
    /// Whether the wheel wraps past its ends.
    pub circular: bool,
    /// Selector window size; `main` is the extent along the scroll axis and
    /// defines the centering target.
    pub selector: Rect,
    /// The initial viewport rectangle, if known at construction time.
    pub initial_rect: Option<Rect>,
    /// Logical item centered at construction time (clamped to the range).
    pub initial_index: usize,
    /// Fling projection model used to compute snap targets.
    pub deceleration: Deceleration,
}

impl WheelOptions {
    pub fn new(count: usize, item_extent: impl Fn(usize) -> u32 + Send + Sync + 'static) -> Self {
        Self {
            count,
            item_extent: Arc::new(item_extent),
            axis: Axis::Vertical,
            circular: false,
            selector: Rect::default(),
            initial_rect: None,
            initial_index: 0,
            deceleration: Deceleration::DEFAULT,
        }
    }

    /// Uniform-extent fast path: every item is `extent` pixels long.
    pub fn uniform(count: usize, extent: u32) -> Self {
        Self::new(count, move |_| extent)
    }

    pub fn with_item_extent(
        mut self,
        item_extent: impl Fn(usize) -> u32 + Send + Sync + 'static,
    ) -> Self {
        self.item_extent = Arc::new(item_extent);
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_circular(mut self, circular: bool) -> Self {
        self.circular = circular;
        self
    }

    pub fn with_selector(mut self, selector: Rect) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_initial_rect(mut self, initial_rect: Option<Rect>) -> Self {
        self.initial_rect = initial_rect;
        self
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_deceleration(mut self, deceleration: Deceleration) -> Self {
        self.deceleration = deceleration;
        self
    }
}

impl core::fmt::Debug for WheelOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WheelOptions")
            .field("count", &self.count)
            .field("axis", &self.axis)
            .field("circular", &self.circular)
            .field("selector", &self.selector)
            .field("initial_rect", &self.initial_rect)
            .field("initial_index", &self.initial_index)
            .field("deceleration", &self.deceleration)
            .finish_non_exhaustive()
    }
}
