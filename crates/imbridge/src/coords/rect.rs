use super::Vec2;

/// Floating-point rectangle stored as edges (`min` top-left, `max` bottom-right).
///
/// Draw commands carry clip bounds in this form, so the bridge keeps it rather
/// than converting to origin/size early and losing inverted rectangles.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    #[inline]
    pub const fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Builds a rect from `[left, top, right, bottom]`.
    #[inline]
    pub const fn from_edges(edges: [f32; 4]) -> Self {
        Self {
            min: Vec2::new(edges[0], edges[1]),
            max: Vec2::new(edges[2], edges[3]),
        }
    }

    #[inline]
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    /// True when the rect has no area or is inverted (`right <= left` or `bottom <= top`).
    #[inline]
    pub fn is_empty(self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }

    /// Moves both edges by `-offset`.
    #[inline]
    pub fn translated_back(self, offset: Vec2) -> Self {
        Self {
            min: self.min - offset,
            max: self.max - offset,
        }
    }

    /// Truncates to an integer pixel rect (origin + size).
    #[inline]
    pub fn to_irect(self) -> IRect {
        IRect {
            x: self.min.x as i32,
            y: self.min.y as i32,
            w: self.width() as i32,
            h: self.height() as i32,
        }
    }
}

/// Integer pixel rectangle (origin + size), the form renderers take for clip,
/// viewport and text-input areas.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct IRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl IRect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(l: f32, t: f32, rt: f32, b: f32) -> Rect { Rect::from_edges([l, t, rt, b]) }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_positive_area() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).is_empty());
    }

    #[test]
    fn is_empty_zero_width_or_height() {
        assert!(r(5.0, 0.0, 5.0, 10.0).is_empty());
        assert!(r(0.0, 5.0, 10.0, 5.0).is_empty());
    }

    #[test]
    fn is_empty_inverted() {
        assert!(r(10.0, 0.0, 0.0, 10.0).is_empty());
        assert!(r(0.0, 10.0, 10.0, 0.0).is_empty());
    }

    // ── translated_back / to_irect ────────────────────────────────────────

    #[test]
    fn translated_back_subtracts_offset_from_both_edges() {
        let moved = r(110.0, 60.0, 150.0, 90.0).translated_back(Vec2::new(100.0, 50.0));
        assert_eq!(moved, r(10.0, 10.0, 50.0, 40.0));
    }

    #[test]
    fn to_irect_truncates() {
        let i = r(1.7, 2.2, 11.9, 12.5).to_irect();
        assert_eq!(i, IRect::new(1, 2, 10, 10));
    }

    #[test]
    fn from_xywh_round_trips_size() {
        let rect = Rect::from_xywh(4.0, 8.0, 16.0, 32.0);
        assert_eq!(rect.width(), 16.0);
        assert_eq!(rect.height(), 32.0);
        assert_eq!(rect.max, Vec2::new(20.0, 40.0));
    }

    #[test]
    fn irect_is_empty() {
        assert!(IRect::new(0, 0, 0, 4).is_empty());
        assert!(IRect::new(0, 0, 4, -1).is_empty());
        assert!(!IRect::new(0, 0, 1, 1).is_empty());
    }
}
