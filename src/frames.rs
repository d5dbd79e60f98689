use std::sync::Arc;

use crate::canvas::{Buffer, Rgba};

/// The ordered sequence of animation frames plus the active frame index.
/// A strip always holds at least one frame; there is no remove operation,
/// so the invariant cannot be broken from outside.
pub struct FrameStrip {
    frames: Vec<Arc<Buffer>>,
    active: usize,
}

impl FrameStrip {
    /// A strip with a single blank frame.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            frames: vec![Arc::new(Buffer::new(width, height))],
            active: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn frame(&self, index: usize) -> &Arc<Buffer> {
        &self.frames[index]
    }

    pub fn active_buffer(&self) -> &Arc<Buffer> {
        debug_assert!(self.active < self.frames.len());
        &self.frames[self.active]
    }

    /// Makes `index` the active frame. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.frames.len() {
            self.active = index;
        }
    }

    /// Duplicates the active frame, inserts the copy immediately after it,
    /// and moves the selection onto the copy. Later edits to either frame
    /// leave the other untouched.
    pub fn add_frame(&mut self) {
        let copy = Arc::new(Buffer::clone(self.active_buffer()));
        self.frames.insert(self.active + 1, copy);
        self.active += 1;
    }

    /// Paints one pixel of the active frame with copy-on-write semantics:
    /// the frame's `Arc` is swapped for the painted buffer, or kept as-is
    /// when the coordinate is out of bounds.
    pub fn paint_active(&mut self, x: usize, y: usize, color: Rgba) {
        let next = self.frames[self.active].painted(x, y, color);
        self.frames[self.active] = next;
    }
}
