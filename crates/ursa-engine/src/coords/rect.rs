use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle of the given size at the origin.
    #[inline]
    pub const fn from_size(w: f32, h: f32) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Same size, repositioned so its center lands on `center`.
    #[inline]
    pub fn center_at(self, center: Vec2) -> Self {
        Self::from_origin_size(center - self.size * 0.5, self.size)
    }

    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::from_origin_size(self.origin + Vec2::new(dx, dy), self.size)
    }

    /// Grows the rectangle by `margin` on every side. Negative margins shrink it.
    #[inline]
    pub fn expand(self, margin: f32) -> Self {
        Self::new(
            self.origin.x - margin,
            self.origin.y - margin,
            self.size.x + margin * 2.0,
            self.size.y + margin * 2.0,
        )
    }

    /// Splits at `offset` pixels from the left edge into `(left, right)`.
    #[inline]
    pub fn split_x(self, offset: f32) -> (Rect, Rect) {
        (
            Rect::new(self.origin.x, self.origin.y, offset, self.size.y),
            Rect::new(self.origin.x + offset, self.origin.y, self.size.x - offset, self.size.y),
        )
    }

    /// Splits at `offset` pixels from the top edge into `(top, bottom)`.
    #[inline]
    pub fn split_y(self, offset: f32) -> (Rect, Rect) {
        (
            Rect::new(self.origin.x, self.origin.y, self.size.x, offset),
            Rect::new(self.origin.x, self.origin.y + offset, self.size.x, self.size.y - offset),
        )
    }

    /// Rounds position and size to whole pixels.
    #[inline]
    pub fn pixel_align(self) -> Self {
        Self::from_origin_size(self.origin.round(), self.size.round())
    }

    /// Moves the rectangle horizontally so its right edge lands on `x`.
    #[inline]
    pub fn align_right(self, x: f32) -> Self {
        Self::new(x - self.size.x, self.origin.y, self.size.x, self.size.y)
    }

    /// Moves the rectangle vertically so its bottom edge lands on `y`.
    #[inline]
    pub fn align_bottom(self, y: f32) -> Self {
        Self::new(self.origin.x, y - self.size.y, self.size.x, self.size.y)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Strict interior test: points on the boundary are outside.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x > self.left() && p.x < self.right() && p.y > self.top() && p.y < self.bottom()
    }
}
