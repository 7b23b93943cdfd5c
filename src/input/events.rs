//! Generic pointer event types fed into the sketchpad by a host.

/// Pointer event in surface-local coordinates.
///
/// Hosts map their native mouse events to these values; `Up` and `Leave`
/// carry no coordinates because they only end the stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed over the surface (starts a stroke)
    Down { x: i32, y: i32 },
    /// Pointer moved over the surface
    Move { x: i32, y: i32 },
    /// Button released
    Up,
    /// Pointer left the surface
    Leave,
    /// Pointer entered the surface (re-measure the surface offset)
    Enter,
}
