//! Projected coordinates and the zoom-shift transform to screen space.

/// Largest shift that still has an effect on an `i64` delta.
const MAX_SHIFT: u32 = 63;

/// A position in the fixed-point Mercator projection.
///
/// Values are opaque signed integers; the store only ever subtracts and
/// shifts them, no floating point is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ProjectedCoord {
    pub x: i32,
    pub y: i32,
}

impl ProjectedCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for ProjectedCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// An integer pixel position on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenPoint {
    pub x: i64,
    pub y: i64,
}

impl ScreenPoint {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Convert to a floating point position for vector renderers.
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x as f64, self.y as f64)
    }
}

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Half the width, rounded down.
    pub fn half_width(&self) -> i64 {
        i64::from(self.width >> 1)
    }

    /// Half the height, rounded down.
    pub fn half_height(&self) -> i64 {
        i64::from(self.height >> 1)
    }
}

/// Maps projected coordinates to pixel offsets around a view center.
///
/// `shift` is the log2 number of projection units per pixel at the current
/// zoom level. It is supplied per call by the map view and never stored by
/// the waypoint store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenTransform {
    /// Projected position shown at the middle of the viewport.
    pub center: ProjectedCoord,
    /// Right shift converting projection units to pixels.
    pub shift: u32,
}

impl ScreenTransform {
    pub const fn new(center: ProjectedCoord, shift: u32) -> Self {
        Self { center, shift }
    }

    /// Pixel displacement of `point` from the center.
    ///
    /// The shift is arithmetic, so negative deltas round towards negative
    /// infinity.
    pub fn delta(&self, point: ProjectedCoord) -> (i64, i64) {
        let shift = self.shift.min(MAX_SHIFT);
        let dx = (i64::from(point.x) - i64::from(self.center.x)) >> shift;
        let dy = (i64::from(point.y) - i64::from(self.center.y)) >> shift;
        (dx, dy)
    }

    /// Manhattan distance from the center in pixels.
    pub fn manhattan(&self, point: ProjectedCoord) -> i64 {
        let (dx, dy) = self.delta(point);
        dx.abs() + dy.abs()
    }

    /// Whether `point` lies strictly inside a viewport centered on `center`.
    pub fn is_inside(&self, point: ProjectedCoord, viewport: Viewport) -> bool {
        let (dx, dy) = self.delta(point);
        dx.abs() < viewport.half_width() && dy.abs() < viewport.half_height()
    }

    /// Screen position of `point` with the center at the middle of `viewport`.
    pub fn to_screen(&self, point: ProjectedCoord, viewport: Viewport) -> ScreenPoint {
        let (dx, dy) = self.delta(point);
        ScreenPoint::new(viewport.half_width() + dx, viewport.half_height() + dy)
    }
}
