//! Glyph metrics record

use serde::{Deserialize, Serialize};

/// Metrics of a single font glyph
///
/// Values are held wider than the wire format so that a table built by hand
/// can carry out-of-range values; they are range-checked when encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Glyph {
    /// Index into the external sprite strip
    pub frame: u32,
    /// Width in pixels (0-255 on the wire)
    pub width: u32,
    /// Height in pixels (0-255 on the wire)
    pub height: u32,
}

impl Glyph {
    pub fn new(frame: u32, width: u32, height: u32) -> Self {
        Self {
            frame,
            width,
            height,
        }
    }

    /// Glyph size as (width, height)
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn frame_index(&self) -> u32 {
        self.frame
    }

    pub fn set_frame_index(&mut self, frame: u32) {
        self.frame = frame;
    }
}
