use serde::{Deserialize, Serialize};

/// A point on the pixel lattice traced by the contour walker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of a detected sprite.
///
/// `right` and `bottom` are exclusive pixel edges: a sprite covering columns
/// 3..=10 has `left = 3` and `right = 11`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Rect {
    /// Build a rectangle from two opposite edges, normalising the order
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left: left.min(right),
            top: top.min(bottom),
            right: left.max(right),
            bottom: top.max(bottom),
        }
    }

    /// Smallest rectangle enclosing every point, or `None` for an empty slice
    pub fn bounding(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut rect = Rect {
            left: first.x,
            top: first.y,
            right: first.x,
            bottom: first.y,
        };

        for p in &points[1..] {
            rect.left = rect.left.min(p.x);
            rect.right = rect.right.max(p.x);
            rect.top = rect.top.min(p.y);
            rect.bottom = rect.bottom.max(p.y);
        }

        Some(rect)
    }

    /// Width in pixels, never less than 1
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left).max(1)
    }

    /// Height in pixels, never less than 1
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top).max(1)
    }
}
