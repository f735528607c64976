use glam::Vec2;
use crate::core::geometry::Rect;

/// View window the host draws. It centres on a target and never shows
/// anything outside the world bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Visible width in world units.
    pub width: f32,
    /// Visible height in world units.
    pub height: f32,
    /// Camera center position in world space.
    pub center: Vec2,
    pub bounds: Rect,
}

impl Camera {
    pub fn new(width: f32, height: f32, bounds: Rect) -> Self {
        Self {
            width,
            height,
            center: bounds.center(),
            bounds,
        }
    }

    /// Resize the visible area (e.g. on window resize).
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        self.clamp_to_bounds();
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.clamp_to_bounds();
    }

    /// Move camera center to target position, clamped to the world.
    pub fn look_at(&mut self, target: Vec2) {
        self.center = target;
        self.clamp_to_bounds();
    }

    /// Visible world rectangle.
    pub fn view(&self) -> Rect {
        Rect::centered_at(self.center, Vec2::new(self.width, self.height))
    }

    fn clamp_to_bounds(&mut self) {
        let half = Vec2::new(self.width, self.height) * 0.5;
        let b = self.bounds;
        // A view larger than the world centres on it.
        self.center.x = if self.width >= b.w {
            b.center().x
        } else {
            self.center.x.clamp(b.left() + half.x, b.right() - half.x)
        };
        self.center.y = if self.height >= b.h {
            b.center().y
        } else {
            self.center.y.clamp(b.top() + half.y, b.bottom() - half.y)
        };
    }
}
