//! Dirty region tracking for incremental presentation.
//!
//! Collects axis-aligned rectangles touched by strokes between two calls to
//! [`DirtyTracker::take_regions`].

use crate::util::{self, Rect};

/// Tracks dirty rectangles accumulated between presents.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    force_full: bool,
}

impl DirtyTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as dirty. Clears any accumulated rectangles.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a dirty rectangle if the tracker is not already full.
    pub fn mark_rect(&mut self, rect: Rect) {
        if !rect.is_valid() || self.force_full {
            return;
        }
        self.regions.push(rect);
    }

    /// Adds the area covered by a stroked segment.
    pub fn mark_segment(&mut self, from: (i32, i32), to: (i32, i32), width: f64) {
        match util::segment_bounds(from, to, width) {
            Some(rect) => self.mark_rect(rect),
            None => self.mark_full(),
        }
    }

    /// Returns true when nothing has been marked since the last drain.
    pub fn is_clean(&self) -> bool {
        !self.force_full && self.regions.is_empty()
    }

    /// Drains the dirty regions gathered so far.
    ///
    /// When the full surface is marked, returns a single rectangle covering the
    /// entire surface; otherwise returns accumulated rectangles clipped to the
    /// surface, dropping those that fall entirely outside it.
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        let Some(bounds) = Rect::new(0, 0, width, height) else {
            self.force_full = false;
            self.regions.clear();
            return Vec::new();
        };

        if self.force_full {
            self.force_full = false;
            self.regions.clear();
            vec![bounds]
        } else {
            self.regions
                .drain(..)
                .filter_map(|rect| rect.intersect(&bounds))
                .collect()
        }
    }
}
