use crate::Axis;

/// Failures surfaced synchronously by configuration setters.
///
/// An empty wheel (zero items) is a normal transient state, not an error:
/// operations that need items resolve to `None` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WheelError {
    /// Selector extents are lengths; negative input is rejected outright
    /// rather than silently clamped.
    #[error("negative selector extent {extent} on {axis:?} axis")]
    NegativeSelectorExtent { axis: Axis, extent: i32 },
}
