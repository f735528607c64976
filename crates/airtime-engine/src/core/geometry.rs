use glam::Vec2;

/// Axis-aligned rectangle in world space. Y grows downward.
///
/// `x`/`y` is the top-left corner, `w`/`h` the size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// The axis a penetration correction is applied along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self::new(min.x, min.y, size.x, size.y)
    }

    /// Rectangle of the given size whose center is `center`.
    pub fn centered_at(center: Vec2, size: Vec2) -> Self {
        Self::from_min_size(center - size * 0.5, size)
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    /// A rectangle with no positive area (including NaN sizes).
    pub fn is_empty(&self) -> bool {
        !(self.w > 0.0 && self.h > 0.0)
    }

    pub fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.w, self.h)
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// The overlapping region, or `None` when the rectangles do not intersect.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    /// Push the rectangle back inside `bounds`, one edge pair per axis.
    ///
    /// Left is checked before right and top before bottom, so a rectangle
    /// larger than the bounds ends up flush with the left/top edge.
    pub fn clamped_to(&self, bounds: &Rect) -> Self {
        let mut out = *self;
        if out.left() < bounds.left() {
            out.x = bounds.left();
        } else if out.right() > bounds.right() {
            out.x = bounds.right() - out.w;
        }
        if out.top() < bounds.top() {
            out.y = bounds.top();
        } else if out.bottom() > bounds.bottom() {
            out.y = bounds.bottom() - out.h;
        }
        out
    }
}

impl Axis {
    /// Choose the correction axis for an intersection.
    ///
    /// A region narrower than it is tall is a side hit and corrects along X.
    /// Everything else, including an exact tie, corrects along Y.
    pub fn for_intersection(intersection: &Rect) -> Axis {
        if intersection.w < intersection.h {
            Axis::X
        } else {
            Axis::Y
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_and_center() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn intersection_region() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 8.0, 10.0, 10.0);
        let i = a.intersection(&b).unwrap();
        assert_eq!(i, Rect::new(5.0, 8.0, 5.0, 2.0));
    }

    #[test]
    fn empty_rect_never_intersects() {
        let a = Rect::new(0.0, 0.0, 0.0, 10.0);
        let b = Rect::new(-5.0, -5.0, 20.0, 20.0);
        assert!(a.is_empty());
        assert!(!a.intersects(&b));
    }

    #[test]
    fn clamp_each_edge_independently() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let r = Rect::new(95.0, -7.0, 10.0, 10.0).clamped_to(&bounds);
        assert_eq!(r, Rect::new(90.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn centered_rect() {
        let r = Rect::centered_at(Vec2::new(50.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(r, Rect::new(40.0, 45.0, 20.0, 10.0));
    }

    #[test]
    fn square_intersection_corrects_vertically() {
        let square = Rect::new(0.0, 0.0, 4.0, 4.0);
        assert_eq!(Axis::for_intersection(&square), Axis::Y);
        let tall = Rect::new(0.0, 0.0, 3.0, 4.0);
        assert_eq!(Axis::for_intersection(&tall), Axis::X);
        let wide = Rect::new(0.0, 0.0, 5.0, 4.0);
        assert_eq!(Axis::for_intersection(&wide), Axis::Y);
    }
}
