//! Pointer tracking between consecutive samples of a stroke.

/// Last recorded pointer sample plus the drawing flag.
///
/// A segment is only ever committed while `is_drawing` is true; the origin is
/// advanced to every sample so consecutive segments share an endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerTrack {
    /// Last X coordinate in surface-local pixels
    pub last_x: i32,
    /// Last Y coordinate in surface-local pixels
    pub last_y: i32,
    /// True between pointer-down and pointer-up/leave
    pub is_drawing: bool,
}

impl PointerTrack {
    /// Creates an idle track at the surface origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the origin to `(x, y)` and starts drawing.
    pub fn start(&mut self, x: i32, y: i32) {
        self.advance(x, y);
        self.is_drawing = true;
    }

    /// Moves the origin without touching the drawing flag.
    pub fn advance(&mut self, x: i32, y: i32) {
        self.last_x = x;
        self.last_y = y;
    }

    /// Stops drawing. The origin is left where it was.
    pub fn stop(&mut self) {
        self.is_drawing = false;
    }

    /// Current segment origin.
    pub fn origin(&self) -> (i32, i32) {
        (self.last_x, self.last_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_resets_origin_and_stop_keeps_it() {
        let mut track = PointerTrack::new();
        assert!(!track.is_drawing);

        track.start(4, 9);
        assert!(track.is_drawing);
        assert_eq!(track.origin(), (4, 9));

        track.advance(6, 1);
        track.stop();
        track.stop();
        assert!(!track.is_drawing);
        assert_eq!(track.origin(), (6, 1));
    }
}
