//! Integer geometry of the "copy" icon
//!
//! Every coordinate is derived from the icon size with integer floor division,
//! so the same pictogram scales from 16px up to 128px without any floating
//! point layout.

/// Smallest size the icon can be drawn at. Below this the padding
/// collapses to zero and the squares lose their offset.
pub const MIN_ICON_SIZE: u32 = 8;

/// Axis-aligned box with inclusive corners
///
/// `[x0, y0, x1, y1]` covers columns `x0..=x1` and rows `y0..=y1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Rect {
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Square anchored at `(x, y)` whose far corner sits `side` pixels away
    pub fn square(x: u32, y: u32, side: u32) -> Self {
        Self::new(x, y, x + side, y + side)
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Box shrunk by `by` pixels on every side, or `None` once it inverts
    pub fn inset(&self, by: u32) -> Option<Rect> {
        let x0 = self.x0 + by;
        let y0 = self.y0 + by;
        let x1 = self.x1.checked_sub(by)?;
        let y1 = self.y1.checked_sub(by)?;
        (x0 <= x1 && y0 <= y1).then(|| Rect::new(x0, y0, x1, y1))
    }
}

/// Derived layout for one icon size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    pub size: u32,
    pub padding: u32,
    /// Bounding box of the background disc
    pub circle: Rect,
    pub rect_size: u32,
    /// Outlined square peeking out from behind
    pub back: Rect,
    /// Filled square drawn on top of `back`
    pub front: Rect,
    pub stroke_width: u32,
}

impl IconGeometry {
    pub fn new(size: u32) -> Self {
        let padding = size / 8;
        let rect_size = size / 3;

        Self {
            size,
            padding,
            circle: Rect::new(padding, padding, size - padding, size - padding),
            rect_size,
            back: Rect::square(size / 3, size / 4, rect_size),
            front: Rect::square(size / 4, size / 3, rect_size),
            stroke_width: (size / 16).max(1),
        }
    }
}
