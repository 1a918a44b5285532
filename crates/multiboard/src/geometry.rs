//! Points, rectangles and click regions in surface coordinates.
//!
//! Surface coordinates grow rightward in `x` and downward in `y`.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A point on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, derive_new::new)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate (downward).
    pub y: f32,
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, derive_new::new)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Shrinks the rectangle by `dx` on the left and right and `dy` on the
    /// top and bottom.
    pub fn inset(&self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.x + dx,
            self.y + dy,
            self.width - dx * 2.0,
            self.height - dy * 2.0,
        )
    }

    /// Same size, new origin.
    pub fn moved_to(&self, origin: Point) -> Self {
        Self::new(origin.x, origin.y, self.width, self.height)
    }
}

/// A rectangle that answers "was this point clicked".
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct HitRegion {
    /// The clickable area.
    rect: Rect,
}

impl HitRegion {
    /// True if `(px, py)` lies within the region. All four edges count as
    /// inside.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        let r = &self.rect;
        px >= r.x && px <= r.right() && py >= r.y && py <= r.bottom()
    }
}

/// A [`HitRegion`] carrying the index of the board cell it covers.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct TaggedHitRegion {
    /// The clickable area.
    region: HitRegion,
    /// Cell index, 0-8 row-major.
    tag: usize,
}

impl TaggedHitRegion {
    /// The region's rectangle.
    pub fn rect(&self) -> &Rect {
        self.region.rect()
    }

    /// See [`HitRegion::contains`].
    pub fn contains(&self, px: f32, py: f32) -> bool {
        self.region.contains(px, py)
    }
}
