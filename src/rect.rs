use crate::units::*;

/// An axis-aligned rectangle with its origin at the top-left corner, in the same
/// coordinate space as the text surface (y grows downwards).
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the left edge
    pub x: Pt,
    /// The y-coordinate of the top edge
    pub y: Pt,
    pub width: Pt,
    pub height: Pt,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect {
            x: Pt(x),
            y: Pt(y),
            width: Pt(width),
            height: Pt(height),
        }
    }

    /// A rectangle of the given size centred on `(cx, cy)`
    pub fn centred(cx: Pt, cy: Pt, width: Pt, height: Pt) -> Rect {
        Rect {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    /// The x-coordinate of the right edge
    pub fn right(&self) -> Pt {
        self.x + self.width
    }

    /// The y-coordinate of the bottom edge
    pub fn bottom(&self) -> Pt {
        self.y + self.height
    }

    /// Separating-axis test between two axis-aligned rectangles. Rectangles which
    /// only share an edge (a zero-area intersection) do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Grow the rectangle by `margin` on all four sides
    pub fn expand(&self, margin: Pt) -> Rect {
        Rect {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + margin * 2.0,
            height: self.height + margin * 2.0,
        }
    }

    /// Shift the rectangle by `(dx, dy)`
    pub fn translate(&self, dx: Pt, dy: Pt) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Free-function form of [Rect::overlaps]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

/// Free-function form of [Rect::expand]
pub fn expand(r: &Rect, margin: Pt) -> Rect {
    r.expand(margin)
}
